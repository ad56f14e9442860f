//! AWS Lambda handler for SIP projections
//!
//! Accepts the three projection inputs as JSON and returns the result along
//! with display-formatted strings.
//!
//! JSON numbers are always finite, so a body carrying `NaN` or `Infinity`
//! fails to parse and is answered with 400 before any projection runs.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};
use sip_calculator::{
    format::{ResultSummary, DEFAULT_CURRENCY_SYMBOL},
    ProjectionEngine, ProjectionInput, ProjectionResult,
};

/// Input for one projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    pub monthly_investment: f64,
    pub period_years: f64,
    pub annual_rate_percent: f64,

    /// Currency symbol for the display strings (default: ₹)
    #[serde(default)]
    pub currency_symbol: Option<String>,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub input: ProjectionInput,
    pub result: ProjectionResult,
    pub future_value: f64,
    pub display: ResultSummary,
}

fn with_cors(
    builder: lambda_http::http::response::Builder,
) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message });
    Ok(with_cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(body.to_string()))?)
}

fn json_response(body: &ProjectionResponse) -> Result<Response<Body>, Error> {
    Ok(with_cors(Response::builder())
        .status(200)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

fn respond(request: ProjectionRequest) -> Result<Response<Body>, Error> {
    let input = ProjectionInput::new(
        request.monthly_investment,
        request.period_years,
        request.annual_rate_percent,
    );
    let result = ProjectionEngine::default().project(&input);

    let symbol = request.currency_symbol.as_deref().unwrap_or(DEFAULT_CURRENCY_SYMBOL);
    json_response(&ProjectionResponse {
        input,
        result,
        future_value: result.future_value(),
        display: ResultSummary::new(&input, &result, symbol),
    })
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(with_cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    handle_body(&body_str)
}

fn handle_body(body: &str) -> Result<Response<Body>, Error> {
    let request: ProjectionRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("rejected request body: {}", e);
            return error_response(400, &format!("Invalid JSON: {}", e));
        }
    };

    log::debug!("projection request: {:?}", request);
    respond(request)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
