//! Rule-based personal finance calculators.
//!
//! Every calculator is a single threshold check or formula over monthly
//! figures. Ratios that divide by income reject a non-positive income.

use crate::error::{AdvisorError, AdvisorResult};
use serde::{Deserialize, Serialize};

/// Months of expenses an emergency fund should cover
pub const EMERGENCY_FUND_MONTHS: f64 = 6.0;

/// Investor risk appetite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTolerance::Low => write!(f, "low"),
            RiskTolerance::Medium => write!(f, "medium"),
            RiskTolerance::High => write!(f, "high"),
        }
    }
}

fn require_income(income: f64) -> AdvisorResult<f64> {
    if income > 0.0 {
        Ok(income)
    } else {
        Err(AdvisorError::NonPositiveIncome(income))
    }
}

/// Classify risk appetite from the share of income set aside for investing
pub fn calculate_risk_tolerance(income: f64, investment_amount: f64) -> AdvisorResult<RiskTolerance> {
    let ratio = investment_amount / require_income(income)?;
    Ok(if ratio > 0.2 {
        RiskTolerance::High
    } else if ratio < 0.1 {
        RiskTolerance::Low
    } else {
        RiskTolerance::Medium
    })
}

pub fn investment_recommendation(risk: RiskTolerance) -> &'static str {
    match risk {
        RiskTolerance::Low => "We recommend investing in bonds or other low-risk assets.",
        RiskTolerance::Medium => "Consider diversifying with a mix of stocks and bonds.",
        RiskTolerance::High => {
            "You might want to invest in high-risk assets like options or cryptocurrency."
        }
    }
}

pub fn expense_optimization_tip(income: f64, expenses: f64) -> &'static str {
    if expenses > income {
        "You are spending more than your income. Consider cutting unnecessary expenses."
    } else if expenses > income * 0.7 {
        "Your expenses are high relative to your income. Look for opportunities to reduce spending."
    } else {
        "Your expenses seem well managed, keep up the good work!"
    }
}

/// Recommended emergency fund for the given monthly expenses
pub fn emergency_fund(monthly_expenses: f64) -> f64 {
    monthly_expenses * EMERGENCY_FUND_MONTHS
}

/// Savings at retirement, with no growth assumed
pub fn retirement_estimate(current_savings: f64, monthly_savings: f64, years_to_retire: u32) -> f64 {
    current_savings + monthly_savings * 12.0 * f64::from(years_to_retire)
}

/// Bonds/stocks split in whole percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioAllocation {
    #[serde(rename = "Bonds")]
    pub bonds: u8,
    #[serde(rename = "Stocks")]
    pub stocks: u8,
}

impl PortfolioAllocation {
    /// Asset class names paired with their percentage weight
    pub fn weights(&self) -> Vec<(String, f64)> {
        vec![
            ("Bonds".to_string(), f64::from(self.bonds)),
            ("Stocks".to_string(), f64::from(self.stocks)),
        ]
    }
}

pub fn portfolio_allocation(risk: RiskTolerance) -> PortfolioAllocation {
    let (bonds, stocks) = match risk {
        RiskTolerance::Low => (80, 20),
        RiskTolerance::Medium => (50, 50),
        RiskTolerance::High => (20, 80),
    };
    PortfolioAllocation { bonds, stocks }
}

pub fn debt_advice(income: f64, debt: f64) -> AdvisorResult<&'static str> {
    let ratio = debt / require_income(income)?;
    Ok(if ratio > 0.5 {
        "You have a high debt-to-income ratio. Consider focusing on debt repayment."
    } else if ratio > 0.3 {
        "Your debt level is manageable. Try to pay it off faster to reduce interest."
    } else {
        "Your debt is under control. Keep it up!"
    })
}

pub fn goal_progress(target_amount: f64, current_savings: f64) -> String {
    let remaining = target_amount - current_savings;
    if remaining > 0.0 {
        format!("You need to save ${} more to reach your goal.", remaining)
    } else {
        "Congratulations! You've reached your financial goal.".to_string()
    }
}

/// Broad investment vehicles with a canned risk profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentType {
    Stocks,
    Bonds,
    RealEstate,
    Crypto,
}

impl InvestmentType {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "stocks" => Some(Self::Stocks),
            "bonds" => Some(Self::Bonds),
            "real_estate" => Some(Self::RealEstate),
            "crypto" => Some(Self::Crypto),
            _ => None,
        }
    }
}

pub fn investment_risk(kind: &str) -> &'static str {
    match InvestmentType::parse(kind) {
        Some(InvestmentType::Stocks) => "High volatility, but potential for high returns.",
        Some(InvestmentType::Bonds) => "Stable returns with low volatility.",
        Some(InvestmentType::RealEstate) => "Moderate risk with relatively stable returns.",
        Some(InvestmentType::Crypto) => "Extremely high risk, but could yield high returns.",
        None => "No data available.",
    }
}

pub fn savings_rate_assessment(income: f64, savings: f64) -> AdvisorResult<&'static str> {
    let rate = savings / require_income(income)? * 100.0;
    Ok(if rate < 10.0 {
        "Your savings rate is low. Try to increase your savings by cutting expenses."
    } else if rate < 20.0 {
        "Your savings rate is moderate. Aim for 20% or more for better financial security."
    } else {
        "Great job! Your savings rate is excellent."
    })
}
