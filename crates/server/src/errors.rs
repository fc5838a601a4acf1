use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::auth::errors::AuthError;
use service::entity::ErrorKind;
use service::errors::ServiceError;
use models::errors::ModelError;
use tracing::error;

/// JSON error body: `{"error": <summary>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }

    pub fn unauthorized(detail: &str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(detail.to_string()))
    }

    fn internal(detail: String) -> Self {
        error!(error = %detail, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(detail))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.error, "detail": self.detail}))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let msg = e.to_string();
        match e {
            ServiceError::Validation(v) if v.kind() == ErrorKind::Internal => Self::internal(msg),
            ServiceError::Validation(_) | ServiceError::Model(ModelError::Validation(_)) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Model(ModelError::Conflict(_)) => Self::new(StatusCode::CONFLICT, "Conflict", Some(msg)),
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => Self::internal(msg),
        }
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        let msg = e.to_string();
        match e {
            AuthError::Validation(v) if v.kind() == ErrorKind::Internal => Self::internal(msg),
            AuthError::Validation(_) => Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg)),
            AuthError::Conflict => Self::new(StatusCode::CONFLICT, "Conflict", Some(msg)),
            AuthError::Unauthorized => Self::unauthorized(&msg),
            AuthError::TokenError(_) | AuthError::Repository(_) => Self::internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::entity::EntityError;

    #[test]
    fn service_errors_map_to_status() {
        let cases = [
            (ServiceError::Validation(EntityError::InvalidPrice), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("product"), StatusCode::NOT_FOUND),
            (ServiceError::Db("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Model(ModelError::Conflict("dup".into())), StatusCode::CONFLICT),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn auth_errors_map_to_status() {
        assert_eq!(JsonApiError::from(AuthError::Unauthorized).status, StatusCode::UNAUTHORIZED);
        assert_eq!(JsonApiError::from(AuthError::Conflict).status, StatusCode::CONFLICT);
        assert_eq!(JsonApiError::from(AuthError::Validation(EntityError::RequiredEmail)).status, StatusCode::BAD_REQUEST);
        assert_eq!(
            JsonApiError::from(AuthError::Validation(EntityError::HashFailure("x".into()))).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
