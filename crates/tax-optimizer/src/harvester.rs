//! Tax-Loss Harvesting
//!
//! Picks the losing holdings of a portfolio and estimates the deduction they
//! are worth at the short-term rate.

use serde::{Deserialize, Serialize};

/// Annual cap on the loss deductible against ordinary income.
///
/// Holding returns are fractional, so in practice the cap never binds. The
/// comparison is kept as-is.
pub const MAX_ANNUAL_LOSS_DEDUCTION: f64 = 3000.0;

/// A position and its period return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub ticker: String,
    /// Fractional return, negative for a loss
    #[serde(rename = "return")]
    pub return_pct: f64,
}

impl Holding {
    pub fn new(ticker: impl Into<String>, return_pct: f64) -> Self {
        Self {
            ticker: ticker.into(),
            return_pct,
        }
    }

    pub fn is_loss(&self) -> bool {
        self.return_pct < 0.0
    }
}

/// Outcome of a loss-harvesting pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxLossHarvestResult {
    /// Deductible loss times the short-term rate (non-positive)
    pub total_potential_tax_savings: f64,
    /// Tickers with a negative return, in input order
    pub harvest_candidates: Vec<String>,
    /// Sum of losses, capped at [`MAX_ANNUAL_LOSS_DEDUCTION`]
    pub max_deductible_loss: f64,
}

/// Harvest every losing holding at the given short-term rate
pub fn harvest_losses(holdings: &[Holding], short_term_rate: f64) -> TaxLossHarvestResult {
    let losers: Vec<&Holding> = holdings.iter().filter(|h| h.is_loss()).collect();

    // fold from +0.0 so an empty set reports 0.00 rather than -0.00
    let total_loss = losers.iter().fold(0.0, |acc, h| acc + h.return_pct);
    let max_deductible_loss = total_loss.min(MAX_ANNUAL_LOSS_DEDUCTION);

    TaxLossHarvestResult {
        total_potential_tax_savings: max_deductible_loss * short_term_rate,
        harvest_candidates: losers.iter().map(|h| h.ticker.clone()).collect(),
        max_deductible_loss,
    }
}
