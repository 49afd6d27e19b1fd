//! HTTP handlers for the evaluation endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::EvaluateModelsError;
use crate::domain::evaluation::ValidationError;

use super::super::error::ApiError;
use super::super::state::ApiState;
use super::dto::EvaluateRequest;

/// POST /evaluate - Compare Model 1 against Models 2 and 3
pub async fn evaluate_models(
    State(state): State<ApiState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let result = state
        .evaluate_models_handler()
        .handle(request.into())
        .await?;

    Ok(Json(result))
}

impl From<EvaluateModelsError> for ApiError {
    fn from(err: EvaluateModelsError) -> Self {
        match err {
            EvaluateModelsError::Validation(e @ ValidationError::EmptyField { .. }) => {
                ApiError::InvalidRequest(format!("{}: {}", e.field(), e))
            }
            EvaluateModelsError::Validation(e) => ApiError::BadRequest(e.to_string()),
            EvaluateModelsError::Upstream(msg) => {
                ApiError::Internal(format!("Error during evaluation: {}", msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluation::EvaluationField;

    #[test]
    fn empty_field_maps_to_invalid_request() {
        let err = EvaluateModelsError::Validation(ValidationError::EmptyField {
            field: EvaluationField::Model2,
        });
        assert_eq!(
            ApiError::from(err),
            ApiError::InvalidRequest("model2: Field cannot be empty".to_string())
        );
    }

    #[test]
    fn length_errors_map_to_bad_request() {
        let err = EvaluateModelsError::Validation(ValidationError::PromptTooLong { length: 10_001 });
        assert_eq!(
            ApiError::from(err),
            ApiError::BadRequest("Prompt too long (max 10,000 characters)".to_string())
        );

        let err = EvaluateModelsError::Validation(ValidationError::ResponseTooLong {
            field: EvaluationField::Model1,
            length: 50_001,
        });
        assert_eq!(
            ApiError::from(err),
            ApiError::BadRequest("model1 response too long (max 50,000 characters)".to_string())
        );
    }

    #[test]
    fn upstream_maps_to_internal_with_prefix() {
        let err = EvaluateModelsError::Upstream("rate limited".to_string());
        assert_eq!(
            ApiError::from(err),
            ApiError::Internal("Error during evaluation: rate limited".to_string())
        );
    }
}
