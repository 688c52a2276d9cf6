//! Tax Strategy
//!
//! Combines bracket lookup, loss harvesting and the target allocation into a
//! single report for one income/portfolio pair.

use crate::allocation::{optimize_for_tax, PortfolioOptimizationResult};
use crate::harvester::{harvest_losses, Holding, TaxLossHarvestResult};
use crate::tax_calculator::{TaxProfile, TaxRates, TaxRegion, TaxRules};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full tax strategy for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxStrategyReport {
    pub tax_loss_harvesting: TaxLossHarvestResult,
    pub portfolio_optimization: PortfolioOptimizationResult,
    pub recommendations: Vec<String>,
}

/// Tax strategy calculator for one income and region.
///
/// Rates are resolved once at construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct TaxStrategyCalculator {
    profile: TaxProfile,
    portfolio: HashMap<String, f64>,
    rates: TaxRates,
}

impl TaxStrategyCalculator {
    /// Create a calculator. Income is taken as-is; unrecognized regions are
    /// priced with the US table.
    pub fn new(income: f64, portfolio: HashMap<String, f64>, region: &str) -> Self {
        Self::with_profile(TaxProfile::new(income, TaxRegion::parse(region)), portfolio)
    }

    pub fn with_profile(profile: TaxProfile, portfolio: HashMap<String, f64>) -> Self {
        let rates = TaxRules::for_region(profile.region()).resolve(profile.income());
        Self {
            profile,
            portfolio,
            rates,
        }
    }

    pub fn profile(&self) -> &TaxProfile {
        &self.profile
    }

    pub fn portfolio(&self) -> &HashMap<String, f64> {
        &self.portfolio
    }

    /// Marginal rates resolved at construction
    pub fn rates(&self) -> &TaxRates {
        &self.rates
    }

    /// Losing holdings and the deduction they are worth
    pub fn compute_loss_harvesting(&self, holdings: &[Holding]) -> TaxLossHarvestResult {
        harvest_losses(holdings, self.rates.short_term_capital_gains)
    }

    /// Fixed tax-efficient target mix priced at the long-term rate
    pub fn optimize_portfolio_for_tax(&self) -> PortfolioOptimizationResult {
        optimize_for_tax(self.rates.long_term_capital_gains, self.profile.income())
    }

    /// Build the full report
    pub fn generate_report(&self, holdings: &[Holding]) -> TaxStrategyReport {
        let tax_loss_harvesting = self.compute_loss_harvesting(holdings);
        let portfolio_optimization = self.optimize_portfolio_for_tax();

        tracing::debug!(
            region = %self.profile.region(),
            holdings = holdings.len(),
            candidates = tax_loss_harvesting.harvest_candidates.len(),
            "generated tax strategy report"
        );

        let recommendations = vec![
            format!(
                "Consider harvesting losses from: {}",
                tax_loss_harvesting.harvest_candidates.join(", ")
            ),
            format!(
                "Potential tax savings: ${:.2}",
                tax_loss_harvesting.total_potential_tax_savings
            ),
            "Recommended portfolio rebalancing for tax efficiency".to_string(),
            format!(
                "Estimated annual tax savings: ${:.2}",
                portfolio_optimization.tax_savings_potential
            ),
        ];

        TaxStrategyReport {
            tax_loss_harvesting,
            portfolio_optimization,
            recommendations,
        }
    }
}
