use super::*;
use approx::assert_relative_eq;
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request};
use llm_client::LlmResult;
use serde_json::{json, Value};
use tower::ServiceExt;

struct FixedReturns(f64);

impl ReturnSource for FixedReturns {
    fn next_return(&self) -> f64 {
        self.0
    }
}

struct EchoChat;

#[async_trait]
impl ChatProvider for EchoChat {
    async fn ask(&self, query: &str) -> LlmResult<String> {
        Ok(format!("echo: {}", query))
    }

    fn backend_name(&self) -> &'static str {
        "echo"
    }
}

struct FailingChat;

#[async_trait]
impl ChatProvider for FailingChat {
    async fn ask(&self, _query: &str) -> LlmResult<String> {
        Err(LlmError::ServiceUnavailable("Status: 500".to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

fn app_with(chat: Option<Arc<dyn ChatProvider>>, fixed_return: f64) -> Router {
    build_router(AppState {
        chat,
        returns: Arc::new(FixedReturns(fixed_return)),
        config: Arc::new(ServerConfig::default()),
    })
}

fn app() -> Router {
    app_with(None, -0.05)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

fn profile(income: f64, investment_amount: f64) -> Value {
    json!({
        "income": income,
        "expenses": 2500,
        "savings": 1000,
        "investment_amount": investment_amount,
        "debt": 500,
        "current_savings": 2000,
        "target_amount": 10000,
        "investment_type": "bonds",
        "monthly_savings": 500,
        "years_to_retire": 25
    })
}

#[tokio::test]
async fn test_health() {
    let (status, _, body) = send(app(), get_req("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["chat_backend"].is_null());
}

#[tokio::test]
async fn test_predict_builds_advice_and_tax_report() {
    let (status, _, body) = send(app(), post_json("/predict", profile(5000.0, 1500.0))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert_eq!(data["risk_tolerance"], "high");
    assert_eq!(data["portfolio"], json!({"Bonds": 20, "Stocks": 80}));
    assert_eq!(data["emergency_fund"], "Recommended emergency fund: $15000");
    assert_eq!(data["investment_risk"], "Stable returns with low volatility.");

    // Annual income 60000 puts short-term gains in the 22% bracket
    let harvest = &data["tax_optimization_report"]["tax_loss_harvesting"];
    assert_eq!(harvest["harvest_candidates"], json!(["Bonds", "Stocks"]));
    assert_relative_eq!(harvest["max_deductible_loss"].as_f64().unwrap(), -0.1, epsilon = 1e-9);
    assert_relative_eq!(
        harvest["total_potential_tax_savings"].as_f64().unwrap(),
        -0.022,
        epsilon = 1e-9
    );

    let recommendations = data["tax_optimization_report"]["recommendations"]
        .as_array()
        .unwrap();
    assert_eq!(recommendations[0], "Consider harvesting losses from: Bonds, Stocks");
    assert_eq!(recommendations[3], "Estimated annual tax savings: $450.00");
}

#[tokio::test]
async fn test_predict_gains_only() {
    let (status, _, body) =
        send(app_with(None, 0.04), post_json("/predict", profile(5000.0, 200.0))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["risk_tolerance"], "low");
    let harvest = &body["data"]["tax_optimization_report"]["tax_loss_harvesting"];
    assert_eq!(harvest["harvest_candidates"], json!([]));
    assert_eq!(harvest["total_potential_tax_savings"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_predict_rejects_zero_income() {
    let (status, _, body) = send(app(), post_json("/predict", profile(0.0, 100.0))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Income must be positive"));
}

#[tokio::test]
async fn test_tax_strategy_report() {
    let request = json!({
        "income": 60000,
        "portfolio": {"stocks": 0.6, "bonds": 0.4},
        "region": "US",
        "holdings": [
            {"ticker": "AAPL", "return": -0.05},
            {"ticker": "MSFT", "return": 0.03}
        ]
    });
    let (status, _, body) = send(app(), post_json("/api/tax/strategy", request)).await;
    assert_eq!(status, StatusCode::OK);

    let harvest = &body["data"]["tax_loss_harvesting"];
    assert_eq!(harvest["harvest_candidates"], json!(["AAPL"]));
    assert_relative_eq!(harvest["max_deductible_loss"].as_f64().unwrap(), -0.05, epsilon = 1e-12);
    assert_relative_eq!(
        harvest["total_potential_tax_savings"].as_f64().unwrap(),
        -0.011,
        epsilon = 1e-12
    );
    assert_eq!(
        body["data"]["portfolio_optimization"]["optimized_portfolio"],
        json!({"bonds": 0.3, "index_funds": 0.4, "dividend_stocks": 0.2, "real_estate": 0.1})
    );
}

#[tokio::test]
async fn test_tax_strategy_unknown_region_matches_us() {
    let request = |region: &str| {
        json!({
            "income": 250000,
            "region": region,
            "holdings": [{"ticker": "VNQ", "return": -0.03}]
        })
    };
    let (_, _, us) = send(app(), post_json("/api/tax/strategy", request("US"))).await;
    let (_, _, eu) = send(app(), post_json("/api/tax/strategy", request("EU"))).await;
    assert_eq!(us["data"], eu["data"]);
}

#[tokio::test]
async fn test_tax_strategy_defaults_region_and_holdings() {
    let (status, _, body) = send(app(), post_json("/api/tax/strategy", json!({"income": 600000}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tax_loss_harvesting"]["harvest_candidates"], json!([]));
    assert_relative_eq!(
        body["data"]["portfolio_optimization"]["estimated_tax_efficiency"]
            .as_f64()
            .unwrap(),
        0.20,
        epsilon = 1e-9
    );
}

#[tokio::test]
async fn test_tax_strategy_rejects_duplicate_ticker() {
    let request = json!({
        "income": 60000,
        "holdings": [
            {"ticker": "AAPL", "return": -0.05},
            {"ticker": "AAPL", "return": 0.01}
        ]
    });
    let (status, _, body) = send(app(), post_json("/api/tax/strategy", request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("duplicate ticker"));
}

#[tokio::test]
async fn test_tax_rates() {
    let (status, _, body) = send(app(), get_req("/api/tax/rates?income=600000")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["region"], "US");
    assert_eq!(body["data"]["fallback"], false);
    assert_eq!(body["data"]["rates"]["short_term_capital_gains"], 0.37);
    assert_eq!(body["data"]["rates"]["long_term_capital_gains"], 0.2);

    let (_, _, eu) = send(app(), get_req("/api/tax/rates?income=600000&region=EU")).await;
    assert_eq!(eu["data"]["fallback"], true);
    assert_eq!(eu["data"]["rates"], body["data"]["rates"]);
}

#[tokio::test]
async fn test_glossary_lookup() {
    let (status, _, body) = send(app(), get_req("/get_financial_term?term=bonds")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["definition"]
        .as_str()
        .unwrap()
        .starts_with("Bonds are fixed-income"));

    let (_, _, unknown) = send(app(), get_req("/get_financial_term?term=annuity")).await;
    assert_eq!(unknown["data"]["definition"], "Term not found in our glossary.");

    let (_, _, missing) = send(app(), get_req("/get_financial_term")).await;
    assert_eq!(missing["data"]["example"], "No example available.");
}

#[tokio::test]
async fn test_financial_advisor_not_configured() {
    let (status, _, body) =
        send(app(), post_json("/financial_advisor", json!({"query": "Roth or traditional?"}))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_financial_advisor_empty_query() {
    let chat: Arc<dyn ChatProvider> = Arc::new(EchoChat);
    let (status, _, body) =
        send(app_with(Some(chat), 0.0), post_json("/financial_advisor", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No query provided");
}

#[tokio::test]
async fn test_financial_advisor_answers() {
    let chat: Arc<dyn ChatProvider> = Arc::new(EchoChat);
    let (status, _, body) = send(
        app_with(Some(chat), 0.0),
        post_json("/financial_advisor", json!({"query": "How big should my emergency fund be?"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["response"],
        "echo: How big should my emergency fund be?"
    );
}

#[tokio::test]
async fn test_financial_advisor_upstream_failure() {
    let chat: Arc<dyn ChatProvider> = Arc::new(FailingChat);
    let (status, _, body) = send(
        app_with(Some(chat), 0.0),
        post_json("/financial_advisor", json!({"query": "hello"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_response_headers() {
    let (_, headers, _) = send(app(), get_req("/health")).await;
    assert!(headers.contains_key("x-request-id"));
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["cache-control"], "no-store");
    assert!(!headers.contains_key("strict-transport-security"));

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(app(), request).await;
    assert_eq!(headers["x-request-id"], "abc-123");
}

#[tokio::test]
async fn test_hsts_when_enabled() {
    let app = build_router(AppState {
        chat: None,
        returns: Arc::new(FixedReturns(0.0)),
        config: Arc::new(ServerConfig {
            enable_hsts: true,
            ..ServerConfig::default()
        }),
    });
    let (_, headers, _) = send(app, get_req("/health")).await;
    assert!(headers.contains_key("strict-transport-security"));
}
