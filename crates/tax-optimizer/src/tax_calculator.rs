//! Tax Calculator
//!
//! Bracket tables and marginal-rate lookup per tax region.

use serde::{Deserialize, Serialize};

/// Supported tax regions.
///
/// Only the US table is populated. Any other code parses to `Other` and is
/// priced with the US table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRegion {
    /// United States - federal brackets
    US,
    /// Unrecognized region code, kept verbatim
    Other(String),
}

impl Default for TaxRegion {
    fn default() -> Self {
        Self::US
    }
}

impl TaxRegion {
    /// Parse a region code. Never fails.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "US" | "USA" => Self::US,
            _ => Self::Other(code.trim().to_string()),
        }
    }

    /// Whether this region has its own bracket table
    pub fn is_populated(&self) -> bool {
        matches!(self, TaxRegion::US)
    }
}

impl std::fmt::Display for TaxRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxRegion::US => write!(f, "US"),
            TaxRegion::Other(code) => write!(f, "{}", code),
        }
    }
}

/// Tax category with its own bracket table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxCategory {
    ShortTermCapitalGains,
    LongTermCapitalGains,
    Dividend,
}

impl TaxCategory {
    pub const ALL: [TaxCategory; 3] = [
        TaxCategory::ShortTermCapitalGains,
        TaxCategory::LongTermCapitalGains,
        TaxCategory::Dividend,
    ];
}

/// Ordered `(threshold, rate)` pairs, strictly descending by threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTable {
    /// Brackets from the highest threshold down
    pub brackets: Vec<(f64, f64)>,
    /// Rate applied when income exceeds no threshold
    pub default_rate: f64,
}

impl BracketTable {
    pub fn new(brackets: Vec<(f64, f64)>, default_rate: f64) -> Self {
        debug_assert!(
            brackets.windows(2).all(|w| w[0].0 > w[1].0),
            "bracket thresholds must be strictly descending"
        );
        Self {
            brackets,
            default_rate,
        }
    }

    /// Rate of the first threshold the income strictly exceeds, walking from
    /// the top bracket down; the default rate otherwise.
    pub fn rate_for(&self, income: f64) -> f64 {
        self.brackets
            .iter()
            .find(|(threshold, _)| income > *threshold)
            .map(|&(_, rate)| rate)
            .unwrap_or(self.default_rate)
    }

    /// Lowest and highest rate this table can return
    pub fn rate_range(&self) -> (f64, f64) {
        self.brackets
            .iter()
            .map(|&(_, rate)| rate)
            .fold((self.default_rate, self.default_rate), |(lo, hi), r| {
                (lo.min(r), hi.max(r))
            })
    }
}

/// Bracket tables for one region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRules {
    pub region: TaxRegion,
    pub short_term_capital_gains: BracketTable,
    pub long_term_capital_gains: BracketTable,
    pub dividend: BracketTable,
}

impl TaxRules {
    /// US federal brackets
    pub fn us() -> Self {
        let preferential = BracketTable::new(vec![(492_300.0, 0.20), (44_625.0, 0.15)], 0.0);
        Self {
            region: TaxRegion::US,
            short_term_capital_gains: BracketTable::new(
                vec![
                    (578_125.0, 0.37),
                    (209_425.0, 0.35),
                    (170_050.0, 0.32),
                    (89_075.0, 0.24),
                    (41_775.0, 0.22),
                ],
                0.12,
            ),
            // Qualified dividends share the long-term table
            long_term_capital_gains: preferential.clone(),
            dividend: preferential,
        }
    }

    /// Get rules for a region. Unpopulated regions use the US table.
    pub fn for_region(region: &TaxRegion) -> Self {
        match region {
            TaxRegion::US => Self::us(),
            TaxRegion::Other(code) => {
                tracing::debug!(region = %code, "no bracket table for region, using US");
                Self::us()
            }
        }
    }

    pub fn table(&self, category: TaxCategory) -> &BracketTable {
        match category {
            TaxCategory::ShortTermCapitalGains => &self.short_term_capital_gains,
            TaxCategory::LongTermCapitalGains => &self.long_term_capital_gains,
            TaxCategory::Dividend => &self.dividend,
        }
    }

    /// Resolve the marginal rate of every category for an income
    pub fn resolve(&self, income: f64) -> TaxRates {
        TaxRates {
            short_term_capital_gains: self.short_term_capital_gains.rate_for(income),
            long_term_capital_gains: self.long_term_capital_gains.rate_for(income),
            dividend: self.dividend.rate_for(income),
        }
    }
}

/// Resolved marginal rates for one income
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxRates {
    pub short_term_capital_gains: f64,
    pub long_term_capital_gains: f64,
    pub dividend: f64,
}

impl TaxRates {
    pub fn get(&self, category: TaxCategory) -> f64 {
        match category {
            TaxCategory::ShortTermCapitalGains => self.short_term_capital_gains,
            TaxCategory::LongTermCapitalGains => self.long_term_capital_gains,
            TaxCategory::Dividend => self.dividend,
        }
    }
}

/// Annual income and the region it is taxed in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxProfile {
    income: f64,
    region: TaxRegion,
}

impl TaxProfile {
    pub fn new(income: f64, region: TaxRegion) -> Self {
        Self { income, region }
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn region(&self) -> &TaxRegion {
        &self.region
    }

    pub fn rates(&self) -> TaxRates {
        TaxRules::for_region(&self.region).resolve(self.income)
    }
}
