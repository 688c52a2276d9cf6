//! Tax-Efficient Allocation
//!
//! The target allocation is a fixed mix; it does not depend on the current
//! portfolio. Efficiency is still computed as a weighted sum so the mix can
//! grow per-class rates later.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Share of annual income assumed recoverable by rebalancing
pub const REBALANCING_SAVINGS_FACTOR: f64 = 0.05;

/// Asset classes of the target mix. Ordering follows the declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    /// Municipal bonds
    Bonds,
    /// Low-turnover index funds
    IndexFunds,
    /// Qualified dividend payers
    DividendStocks,
    RealEstate,
}

impl AssetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Bonds => "bonds",
            AssetClass::IndexFunds => "index_funds",
            AssetClass::DividendStocks => "dividend_stocks",
            AssetClass::RealEstate => "real_estate",
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed tax-efficient target mix
pub fn target_allocation() -> BTreeMap<AssetClass, f64> {
    BTreeMap::from([
        (AssetClass::Bonds, 0.3),
        (AssetClass::IndexFunds, 0.4),
        (AssetClass::DividendStocks, 0.2),
        (AssetClass::RealEstate, 0.1),
    ])
}

/// Target allocation plus its estimated tax effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioOptimizationResult {
    pub optimized_portfolio: BTreeMap<AssetClass, f64>,
    pub estimated_tax_efficiency: f64,
    pub tax_savings_potential: f64,
}

/// Price the target mix at the long-term rate for the given income
pub fn optimize_for_tax(long_term_rate: f64, income: f64) -> PortfolioOptimizationResult {
    let optimized_portfolio = target_allocation();

    let estimated_tax_efficiency: f64 = optimized_portfolio
        .values()
        .map(|fraction| long_term_rate * fraction)
        .sum();

    PortfolioOptimizationResult {
        tax_savings_potential: estimated_tax_efficiency * income * REBALANCING_SAVINGS_FACTOR,
        optimized_portfolio,
        estimated_tax_efficiency,
    }
}
