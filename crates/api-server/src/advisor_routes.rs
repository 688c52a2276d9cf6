//! Advisor API Routes
//!
//! Advice from monthly figures, glossary lookups and the advisor chatbot.

use advisor_core::{build_advisory_report, lookup_term, AdvisoryReport, FinancialProfile, GlossaryEntry};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use llm_client::LlmError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tax_optimizer::{Holding, TaxStrategyCalculator, TaxStrategyReport};

use crate::request_id::RequestId;
use crate::{ApiResponse, AppError, AppState};

/// Advice plus the tax strategy built from the suggested allocation
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    #[serde(flatten)]
    pub advice: AdvisoryReport,
    pub tax_optimization_report: TaxStrategyReport,
}

#[derive(Debug, Deserialize)]
pub struct TermQuery {
    pub term: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdvisorQuery {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AdvisorAnswer {
    pub response: String,
}

pub fn advisor_routes() -> Router<AppState> {
    Router::new()
        .route("/predict", post(predict))
        .route("/get_financial_term", get(get_financial_term))
        .route("/financial_advisor", post(financial_advisor))
}

async fn predict(
    State(state): State<AppState>,
    Json(profile): Json<FinancialProfile>,
) -> Result<Json<ApiResponse<PredictResponse>>, AppError> {
    let advice = build_advisory_report(&profile)
        .map_err(|e| AppError::with_status(StatusCode::BAD_REQUEST, e))?;

    // One simulated holding per asset class of the suggested allocation
    let weights = advice.portfolio.weights();
    let holdings: Vec<Holding> = weights
        .iter()
        .map(|(class, _)| Holding::new(class.clone(), state.returns.next_return()))
        .collect();
    let portfolio: HashMap<String, f64> = weights.into_iter().collect();

    let calculator = TaxStrategyCalculator::new(profile.annual_income(), portfolio, "US");
    let tax_optimization_report = calculator.generate_report(&holdings);

    tracing::info!(
        risk_tolerance = %advice.risk_tolerance,
        harvest_candidates = tax_optimization_report.tax_loss_harvesting.harvest_candidates.len(),
        "advice generated"
    );

    Ok(Json(ApiResponse::success(PredictResponse {
        advice,
        tax_optimization_report,
    })))
}

async fn get_financial_term(Query(query): Query<TermQuery>) -> Json<ApiResponse<GlossaryEntry>> {
    let term = query.term.unwrap_or_default();
    Json(ApiResponse::success(lookup_term(&term)))
}

async fn financial_advisor(
    State(state): State<AppState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Json(request): Json<AdvisorQuery>,
) -> Result<Json<ApiResponse<AdvisorAnswer>>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::bad_request("No query provided"));
    }

    let chat = state.chat.as_ref().ok_or_else(|| {
        AppError::with_status(
            StatusCode::SERVICE_UNAVAILABLE,
            anyhow::anyhow!("Financial advisor chat is not configured"),
        )
    })?;

    let response = chat.ask(&request.query).await.map_err(|e| {
        tracing::warn!(request_id = %request_id, backend = chat.backend_name(), error = %e, "advisor chat failed");
        let status = match e {
            LlmError::EmptyQuery => StatusCode::BAD_REQUEST,
            LlmError::RequestFailed(ref err) if err.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        };
        AppError::with_status(status, e)
    })?;

    Ok(Json(ApiResponse::success(AdvisorAnswer { response })))
}
