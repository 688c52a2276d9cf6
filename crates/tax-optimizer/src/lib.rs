//! Tax Optimizer
//!
//! Bracket-based tax strategy: marginal-rate lookup, tax-loss harvesting
//! candidates and a fixed tax-efficient target allocation.
//! Only the US tables are populated; other regions fall back to them.

pub mod allocation;
pub mod harvester;
pub mod strategy;
pub mod tax_calculator;

pub use allocation::{target_allocation, AssetClass, PortfolioOptimizationResult};
pub use harvester::{harvest_losses, Holding, TaxLossHarvestResult, MAX_ANNUAL_LOSS_DEDUCTION};
pub use strategy::{TaxStrategyCalculator, TaxStrategyReport};
pub use tax_calculator::{BracketTable, TaxCategory, TaxProfile, TaxRates, TaxRegion, TaxRules};
