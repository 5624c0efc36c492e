//! Translation of HTTP failures into domain errors.

use petmap_core::PetMapError;
use reqwest::StatusCode;
use serde::Deserialize;

/// Backend call whose failure is being translated.
///
/// Each operation has its own fallback message and a few status codes that
/// mean something specific for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    FetchPoints,
    CreatePoint,
    SignIn,
    SignUp,
}

impl ApiOperation {
    fn fallback_message(self) -> &'static str {
        match self {
            Self::FetchPoints => "Failed to fetch points.",
            Self::CreatePoint => "Failed to save point.",
            Self::SignIn => "Failed to authenticate.",
            Self::SignUp => "Failed to register user.",
        }
    }

    /// Whether `status` is the success answer for this call.
    ///
    /// The points endpoints answer with one exact status (200 on list, 201 on
    /// create); the auth endpoints accept any 2xx.
    pub fn is_success(self, status: StatusCode) -> bool {
        match self {
            Self::FetchPoints => status == StatusCode::OK,
            Self::CreatePoint => status == StatusCode::CREATED,
            Self::SignIn | Self::SignUp => status.is_success(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extracts `{"message": "..."}` from an error body, if present.
fn backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

/// Maps a response the operation does not accept onto the error taxonomy.
///
/// - 400 → `Validation`
/// - 401/403 → `Auth`
/// - 409 → `Conflict` for sign-up, `Server` otherwise
/// - anything else → `Server`
///
/// The backend's own message wins over the fixed one when it sends one.
pub fn error_for_status(operation: ApiOperation, status: StatusCode, body: &str) -> PetMapError {
    let message = |fixed: &str| backend_message(body).unwrap_or_else(|| fixed.to_string());

    match status {
        StatusCode::BAD_REQUEST => PetMapError::validation(message("Invalid request.")),
        StatusCode::UNAUTHORIZED if operation == ApiOperation::SignIn => {
            PetMapError::auth(message("Wrong email or password."))
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            PetMapError::auth(message("Session expired or not authorized. Please sign in again."))
        }
        StatusCode::CONFLICT if operation == ApiOperation::SignUp => {
            PetMapError::conflict(message("User already registered."))
        }
        _ => PetMapError::server(status.as_u16(), message(operation.fallback_message())),
    }
}

/// Maps a failure that produced no usable response.
pub fn error_for_transport(operation: ApiOperation, err: reqwest::Error) -> PetMapError {
    if err.is_decode() {
        return PetMapError::malformed(format!("{} Unexpected response: {}", operation.fallback_message(), err));
    }
    let reason = if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "could not connect to server"
    } else {
        "network error"
    };
    PetMapError::transport(format!("{} ({}: {})", operation.fallback_message(), reason, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_is_auth_not_server() {
        let err = error_for_status(ApiOperation::FetchPoints, StatusCode::UNAUTHORIZED, "");
        assert!(err.is_auth());
        assert!(!err.is_server());

        let err = error_for_status(ApiOperation::FetchPoints, StatusCode::FORBIDDEN, "");
        assert!(err.is_auth());
    }

    #[test]
    fn test_bad_request_is_validation() {
        let err = error_for_status(ApiOperation::CreatePoint, StatusCode::BAD_REQUEST, "");
        assert!(err.is_validation());
    }

    #[test]
    fn test_conflict_only_for_sign_up() {
        assert!(error_for_status(ApiOperation::SignUp, StatusCode::CONFLICT, "").is_conflict());
        assert!(error_for_status(ApiOperation::CreatePoint, StatusCode::CONFLICT, "").is_server());
    }

    #[test]
    fn test_other_statuses_are_server_errors() {
        let err = error_for_status(ApiOperation::FetchPoints, StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(
            err,
            PetMapError::server(502, "Failed to fetch points.")
        );
    }

    #[test]
    fn test_backend_message_is_preferred() {
        let err = error_for_status(
            ApiOperation::SignIn,
            StatusCode::UNAUTHORIZED,
            r#"{"message": "Conta bloqueada"}"#,
        );
        assert_eq!(err.user_message(), "Conta bloqueada");

        let err = error_for_status(ApiOperation::SignIn, StatusCode::UNAUTHORIZED, r#"{"message": ""}"#);
        assert_eq!(err.user_message(), "Wrong email or password.");
    }

    #[test]
    fn test_points_calls_accept_only_their_exact_status() {
        assert!(ApiOperation::FetchPoints.is_success(StatusCode::OK));
        assert!(!ApiOperation::FetchPoints.is_success(StatusCode::NO_CONTENT));
        assert!(ApiOperation::CreatePoint.is_success(StatusCode::CREATED));
        assert!(!ApiOperation::CreatePoint.is_success(StatusCode::OK));
        assert!(ApiOperation::SignUp.is_success(StatusCode::CREATED));
        assert!(ApiOperation::SignIn.is_success(StatusCode::OK));
    }

    #[test]
    fn test_unexpected_success_status_is_server_error() {
        let err = error_for_status(ApiOperation::CreatePoint, StatusCode::OK, "{}");
        assert_eq!(err, PetMapError::server(200, "Failed to save point."));
    }
}
