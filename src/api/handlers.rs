//! HTTP request handlers for the filing engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{recalculate_period_group, recompute_bonus_amount};

use super::request::{
    BonusCalculationRequest, CreateFilingRequest, RewardCalculationRequest, ValidateRequest,
};
use super::response::{ApiError, ApiErrorResponse, ValidationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/filings", post(create_filing_handler))
        .route("/filings/validate", post(validate_handler))
        .route("/calculate/reward", post(reward_handler))
        .route("/calculate/bonus", post(bonus_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /filings.
///
/// Instantiates a new draft filing of the requested type, seeded from the
/// organization profile.
async fn create_filing_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateFilingRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing filing creation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let registry = state.registry();
    match registry.new_filing(
        request.filing_type,
        request.organization_id,
        request.employee_id,
        state.config().organization(),
        Utc::now(),
    ) {
        Ok(filing) => {
            info!(
                correlation_id = %correlation_id,
                filing_id = %filing.id,
                filing_type = %filing.filing_type,
                "Filing created"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(filing),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Filing creation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /filings/validate.
///
/// Reports the missing required fields and the malformed populated values
/// of a filing payload without mutating anything.
async fn validate_handler(
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let mut missing = request.data.missing_fields();
    missing.extend(request.data.malformed_fields());
    info!(
        correlation_id = %correlation_id,
        filing_type = %request.data.filing_type(),
        missing_count = missing.len(),
        "Validation completed"
    );
    let response = ValidationResponse {
        valid: missing.is_empty(),
        missing,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /calculate/reward.
///
/// Recalculates the derived fields of a reward period group and returns
/// the updated group.
async fn reward_handler(
    payload: Result<Json<RewardCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reward calculation request");

    let mut request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let aggregates = recalculate_period_group(&mut request.periods);
    info!(
        correlation_id = %correlation_id,
        valid_months = aggregates.valid_months,
        total = %aggregates.total,
        "Reward calculation completed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(request.periods),
    )
        .into_response()
}

/// Handler for POST /calculate/bonus.
///
/// Recomputes the truncated bonus amount for each person row and returns
/// the updated rows.
async fn bonus_handler(
    payload: Result<Json<BonusCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bonus calculation request");

    let mut request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    for person in request.persons.iter_mut() {
        recompute_bonus_amount(person);
    }
    info!(
        correlation_id = %correlation_id,
        persons_count = request.persons.len(),
        "Bonus calculation completed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(request.persons),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{
        BonusPaymentPerson, FilingStatus, FilingType, PaymentAmount, RewardPeriodGroup,
    };
    use crate::schema::FilingData;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/organization").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(router: Router, uri: &str, body: String) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_create_filing_returns_201() {
        let router = create_router(create_test_state());

        let body = r#"{
            "filing_type": "insurance_enrolment",
            "organization_id": "org_001"
        }"#;

        let response = post_json(router, "/filings", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let filing: crate::models::Filing = serde_json::from_slice(&body).unwrap();

        assert_eq!(filing.filing_type, FilingType::InsuranceEnrolment);
        assert_eq!(filing.status, FilingStatus::Draft);
        assert_eq!(filing.organization_id, "org_001");
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post_json(router, "/filings", "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_unknown_filing_type_returns_400() {
        let router = create_router(create_test_state());

        let body = r#"{
            "filing_type": "holiday_request",
            "organization_id": "org_001"
        }"#;

        let response = post_json(router, "/filings", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_004_validate_reports_missing_fields() {
        let router = create_router(create_test_state());

        let body = r#"{
            "data": {
                "type": "hire_report",
                "payload": {
                    "person": {}
                }
            }
        }"#;

        let response = post_json(router, "/filings/validate", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ValidationResponse = serde_json::from_slice(&body).unwrap();

        assert!(!result.valid);
        assert!(result.missing.iter().any(|f| f.contains("name")));
    }

    #[tokio::test]
    async fn test_api_005_validate_accepts_complete_payload() {
        let router = create_router(create_test_state());

        let body = r#"{
            "data": {
                "type": "hire_report",
                "payload": {
                    "person": {
                        "name": {
                            "last": "Sato",
                            "first": "Ken",
                            "last_kana": "sato",
                            "first_kana": "ken"
                        }
                    }
                }
            }
        }"#;

        let response = post_json(router, "/filings/validate", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ValidationResponse = serde_json::from_slice(&body).unwrap();

        assert!(result.valid, "unexpected missing fields: {:?}", result.missing);
    }

    #[tokio::test]
    async fn test_api_006_reward_calculation() {
        let router = create_router(create_test_state());

        let mut periods = RewardPeriodGroup::default();
        periods.salary_months[0].base_days = Some(20);
        periods.salary_months[0].currency = Some(Decimal::new(300_000, 0));
        periods.salary_months[1].base_days = Some(15);
        periods.salary_months[1].currency = Some(Decimal::new(300_000, 0));
        periods.salary_months[2].base_days = Some(30);
        periods.salary_months[2].currency = Some(Decimal::new(330_000, 0));

        let request = RewardCalculationRequest { periods };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/calculate/reward", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: RewardPeriodGroup = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.total, Decimal::new(630_000, 0));
        assert_eq!(result.average, Some(Decimal::new(315_000, 0)));
    }

    #[tokio::test]
    async fn test_api_007_bonus_calculation_truncates() {
        let router = create_router(create_test_state());

        let request = BonusCalculationRequest {
            persons: vec![BonusPaymentPerson {
                payment: PaymentAmount {
                    currency: Some(Decimal::new(512_345, 0)),
                    in_kind: None,
                },
                ..Default::default()
            }],
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/calculate/bonus", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: Vec<BonusPaymentPerson> = serde_json::from_slice(&body).unwrap();

        assert_eq!(result[0].bonus_amount, Some(Decimal::new(512_000, 0)));
    }

    #[tokio::test]
    async fn test_api_008_created_filing_data_matches_type() {
        let router = create_router(create_test_state());

        let body = r#"{
            "filing_type": "standard_reward_assessment",
            "organization_id": "org_001",
            "employee_id": "emp_001"
        }"#;

        let response = post_json(router, "/filings", body.to_string()).await;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let filing: crate::models::Filing = serde_json::from_slice(&body).unwrap();

        assert!(matches!(
            filing.data,
            FilingData::StandardRewardAssessment(_)
        ));
        assert_eq!(filing.employee_id.as_deref(), Some("emp_001"));
    }

    #[tokio::test]
    async fn test_api_009_validate_reports_malformed_values() {
        let router = create_router(create_test_state());

        let body = r#"{
            "data": {
                "type": "insurance_enrolment",
                "payload": {
                    "person": {
                        "name": {"last": "Sato", "first": "Ken"},
                        "birth_date": {"era": "reiwa", "year": 6, "month": 2, "day": 30},
                        "identification": {"kind": "personal_number", "value": "123"}
                    }
                }
            }
        }"#;

        let response = post_json(router, "/filings/validate", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ValidationResponse = serde_json::from_slice(&body).unwrap();

        assert!(!result.valid);
        assert!(result.missing.contains(&"person.birth_date".to_string()));
        assert!(result.missing.contains(&"person.identification".to_string()));
    }
}
