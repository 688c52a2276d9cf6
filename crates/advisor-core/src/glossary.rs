//! Financial terms glossary

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    pub definition: &'static str,
    pub example: &'static str,
}

const NOT_FOUND: GlossaryEntry = GlossaryEntry {
    definition: "Term not found in our glossary.",
    example: "No example available.",
};

const TERMS: &[(&str, GlossaryEntry)] = &[
    (
        "risk_tolerance",
        GlossaryEntry {
            definition: "Risk tolerance is the amount of financial uncertainty an investor can handle. It measures how comfortable you are with potential investment losses in pursuit of potential gains.",
            example: "Someone with high risk tolerance might be willing to invest in volatile stocks, while someone with low risk tolerance prefers stable, low-risk investments.",
        },
    ),
    (
        "bonds",
        GlossaryEntry {
            definition: "Bonds are fixed-income investments where you lend money to a government or company in exchange for regular interest payments and return of the principal amount at maturity.",
            example: "Government savings bonds are typically considered low-risk investments with predictable returns.",
        },
    ),
    (
        "stocks",
        GlossaryEntry {
            definition: "Stocks represent ownership shares in a company. When you buy stocks, you become a partial owner of that company and can potentially benefit from its growth and profits.",
            example: "Buying Apple stock means you own a small piece of the Apple company.",
        },
    ),
    (
        "emergency_fund",
        GlossaryEntry {
            definition: "An emergency fund is a savings account set aside to cover unexpected expenses or financial emergencies, typically 3-6 months of living expenses.",
            example: "If you lose your job, an emergency fund can help you cover basic living expenses while you find new employment.",
        },
    ),
    (
        "debt_ratio",
        GlossaryEntry {
            definition: "Debt-to-income ratio is a financial metric that compares your monthly debt payments to your monthly income, helping assess your financial health.",
            example: "If you earn $5000 monthly and have $1500 in debt payments, your debt ratio is 30%.",
        },
    ),
    (
        "tax_loss_harvesting",
        GlossaryEntry {
            definition: "Tax loss harvesting is an investment strategy where you sell securities at a loss to offset capital gains taxes, potentially reducing your tax liability.",
            example: "If you have a stock that has decreased in value, selling it can help offset taxes on other investment gains.",
        },
    ),
    (
        "portfolio_allocation",
        GlossaryEntry {
            definition: "Portfolio allocation is the process of dividing investments among different asset categories like stocks, bonds, and cash to balance risk and reward.",
            example: "A conservative portfolio might have 70% bonds and 30% stocks, while an aggressive portfolio might reverse those percentages.",
        },
    ),
];

/// Look up a term, ignoring case and surrounding whitespace.
/// Unknown terms get a placeholder entry.
pub fn lookup_term(term: &str) -> GlossaryEntry {
    let key = term.trim().to_ascii_lowercase();
    TERMS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, entry)| *entry)
        .unwrap_or(NOT_FOUND)
}

/// All known term keys
pub fn terms() -> impl Iterator<Item = &'static str> {
    TERMS.iter().map(|(name, _)| *name)
}
