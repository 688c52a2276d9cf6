//! Advisor Core
//!
//! Rule-based personal finance advice: risk tolerance, budgeting tips,
//! savings projections and a glossary of common terms.

pub mod calculators;
pub mod error;
pub mod glossary;
pub mod report;

pub use calculators::{
    calculate_risk_tolerance, debt_advice, emergency_fund, expense_optimization_tip,
    goal_progress, investment_recommendation, investment_risk, portfolio_allocation,
    retirement_estimate, savings_rate_assessment, InvestmentType, PortfolioAllocation,
    RiskTolerance,
};
pub use error::{AdvisorError, AdvisorResult};
pub use glossary::{lookup_term, GlossaryEntry};
pub use report::{build_advisory_report, AdvisoryReport, FinancialProfile};
