//! Advisory report assembled from every calculator.

use crate::calculators::{
    calculate_risk_tolerance, debt_advice, emergency_fund, expense_optimization_tip,
    goal_progress, investment_recommendation, investment_risk, portfolio_allocation,
    retirement_estimate, savings_rate_assessment, PortfolioAllocation, RiskTolerance,
};
use crate::error::{AdvisorError, AdvisorResult};
use serde::{Deserialize, Serialize};

/// Monthly financial figures submitted by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub investment_amount: f64,
    #[serde(default)]
    pub debt: f64,
    #[serde(default)]
    pub current_savings: f64,
    #[serde(default)]
    pub target_amount: f64,
    #[serde(default)]
    pub investment_type: String,
    #[serde(default)]
    pub monthly_savings: f64,
    #[serde(default)]
    pub years_to_retire: u32,
}

impl FinancialProfile {
    /// Reject non-finite figures and a non-positive income
    pub fn validate(&self) -> AdvisorResult<()> {
        let figures = [
            ("income", self.income),
            ("expenses", self.expenses),
            ("savings", self.savings),
            ("investment_amount", self.investment_amount),
            ("debt", self.debt),
            ("current_savings", self.current_savings),
            ("target_amount", self.target_amount),
            ("monthly_savings", self.monthly_savings),
        ];
        if let Some((name, _)) = figures.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AdvisorError::InvalidData(format!("{} must be a finite number", name)));
        }
        if self.income <= 0.0 {
            return Err(AdvisorError::NonPositiveIncome(self.income));
        }
        Ok(())
    }

    /// Monthly income scaled to a year
    pub fn annual_income(&self) -> f64 {
        self.income * 12.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub risk_tolerance: RiskTolerance,
    pub investment_recommendation: String,
    pub expense_optimization_tips: String,
    pub emergency_fund: String,
    pub retirement_estimate: String,
    pub portfolio: PortfolioAllocation,
    pub debt_advice: String,
    pub goal_tracking: String,
    pub investment_risk: String,
    pub savings_rate: String,
}

pub fn build_advisory_report(profile: &FinancialProfile) -> AdvisorResult<AdvisoryReport> {
    profile.validate()?;

    let risk_tolerance = calculate_risk_tolerance(profile.income, profile.investment_amount)?;

    Ok(AdvisoryReport {
        risk_tolerance,
        investment_recommendation: investment_recommendation(risk_tolerance).to_string(),
        expense_optimization_tips: expense_optimization_tip(profile.income, profile.expenses)
            .to_string(),
        emergency_fund: format!(
            "Recommended emergency fund: ${}",
            emergency_fund(profile.expenses)
        ),
        retirement_estimate: format!(
            "Estimated savings at retirement: ${}",
            retirement_estimate(
                profile.current_savings,
                profile.monthly_savings,
                profile.years_to_retire
            )
        ),
        portfolio: portfolio_allocation(risk_tolerance),
        debt_advice: debt_advice(profile.income, profile.debt)?.to_string(),
        goal_tracking: goal_progress(profile.target_amount, profile.current_savings),
        investment_risk: investment_risk(&profile.investment_type).to_string(),
        savings_rate: savings_rate_assessment(profile.income, profile.savings)?.to_string(),
    })
}
