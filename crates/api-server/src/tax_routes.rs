//! Tax Strategy API Routes
//!
//! Direct access to the tax strategy calculator and the bracket lookup.

use axum::{
    extract::Query,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tax_optimizer::{Holding, TaxProfile, TaxRates, TaxRegion, TaxStrategyCalculator, TaxStrategyReport};

use crate::{ApiResponse, AppError, AppState};

fn default_region() -> String {
    "US".to_string()
}

/// Request for a full tax strategy report
#[derive(Debug, Deserialize)]
pub struct TaxStrategyRequest {
    /// Annual income
    pub income: f64,
    #[serde(default)]
    pub portfolio: HashMap<String, f64>,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub holdings: Vec<Holding>,
}

impl TaxStrategyRequest {
    /// Reject what the calculator assumes never happens
    fn validate(&self) -> Result<(), AppError> {
        if !self.income.is_finite() {
            return Err(AppError::bad_request("income must be a finite number"));
        }
        if let Some((class, _)) = self.portfolio.iter().find(|(_, w)| !w.is_finite()) {
            return Err(AppError::bad_request(format!(
                "portfolio weight for '{}' must be a finite number",
                class
            )));
        }

        let mut seen = HashSet::new();
        for holding in &self.holdings {
            if holding.ticker.trim().is_empty() {
                return Err(AppError::bad_request("holding ticker must not be empty"));
            }
            if !holding.return_pct.is_finite() {
                return Err(AppError::bad_request(format!(
                    "return for '{}' must be a finite number",
                    holding.ticker
                )));
            }
            if !seen.insert(holding.ticker.as_str()) {
                return Err(AppError::bad_request(format!(
                    "duplicate ticker '{}'",
                    holding.ticker
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct RatesQuery {
    pub income: f64,
    pub region: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RatesResponse {
    /// Region as requested
    pub region: String,
    /// Whether the US table was used in place of the requested region
    pub fallback: bool,
    pub rates: TaxRates,
}

pub fn tax_routes() -> Router<AppState> {
    Router::new()
        .route("/api/tax/strategy", post(tax_strategy))
        .route("/api/tax/rates", get(tax_rates))
}

async fn tax_strategy(
    Json(request): Json<TaxStrategyRequest>,
) -> Result<Json<ApiResponse<TaxStrategyReport>>, AppError> {
    request.validate()?;

    let calculator =
        TaxStrategyCalculator::new(request.income, request.portfolio, &request.region);
    let report = calculator.generate_report(&request.holdings);

    Ok(Json(ApiResponse::success(report)))
}

async fn tax_rates(
    Query(query): Query<RatesQuery>,
) -> Result<Json<ApiResponse<RatesResponse>>, AppError> {
    if !query.income.is_finite() {
        return Err(AppError::bad_request("income must be a finite number"));
    }

    let region = TaxRegion::parse(query.region.as_deref().unwrap_or("US"));
    let fallback = !region.is_populated();
    let profile = TaxProfile::new(query.income, region);

    Ok(Json(ApiResponse::success(RatesResponse {
        region: profile.region().to_string(),
        fallback,
        rates: profile.rates(),
    })))
}
