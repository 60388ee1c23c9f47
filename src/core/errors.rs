//! # Application Error Handling System
//!
//! 사용자 관리 서비스를 위한 통합 에러 처리 시스템입니다.
//! 모든 에러는 종류(kind)별로 구분 가능하며, 전송 계층에서
//! `actix_web::ResponseError`를 통해 적절한 HTTP 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! | AppError | HTTP Status | 발생 시점 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 400 Bad Request | 필드 검증 실패 (필드별 메시지 맵) |
//! | `InvalidId` | 400 Bad Request | 식별자 문자열 파싱 실패 |
//! | `NotFound` | 404 Not Found | 단건 조회 결과 없음 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 연결/직렬화 실패 |
//! | `HashingError` | 500 Internal Server Error | 비밀번호 해싱 실패 |
//! | `Cancelled` | 503 Service Unavailable | 호출자가 작업을 취소함 |
//! | `DeadlineExceeded` | 504 Gateway Timeout | 작업 제한 시간 초과 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 전파 정책
//!
//! - 검증 에러는 모두 수집된 뒤 한 번에 반환되며, 저장소를 변경하지 않습니다.
//! - 식별자 파싱 에러와 저장소 에러는 즉시 작업을 중단하고 그대로 호출자에게 전달됩니다.
//! - 코어 내부에는 재시도 로직이 없습니다.
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let id = UserId::parse("not-hex")?; // AppError::InvalidId
//! ```

use std::collections::BTreeMap;
use thiserror::Error;

/// 필드 이름 → 에러 메시지 맵
///
/// 비어 있으면 검증 성공을 의미합니다.
pub type FieldErrors = BTreeMap<String, String>;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 위반된 모든 규칙이 필드별로 담겨 있습니다.
    #[error("Validation error: {}", describe_field_errors(.0))]
    ValidationError(FieldErrors),

    /// 잘못된 식별자 형식 (400 Bad Request)
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 비밀번호 해싱 실패 (500 Internal Server Error)
    #[error("Hashing error: {0}")]
    HashingError(String),

    /// 호출자에 의한 작업 취소 (503 Service Unavailable)
    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    /// 작업 제한 시간 초과 (504 Gateway Timeout)
    #[error("Deadline exceeded: {0}")]
    DeadlineExceeded(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

fn describe_field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Cancelled(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DeadlineExceeded(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 에러는 필드별 메시지 맵 그대로, 나머지는 `{"error": ...}` 형태로 직렬화됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let mut builder = actix_web::HttpResponse::build(self.status_code());

        match self {
            AppError::ValidationError(errors) => builder.json(errors),
            _ => builder.json(serde_json::json!({
                "error": self.to_string()
            })),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let mut errors = FieldErrors::new();
        errors.insert("emailError".to_string(), "email address is invalid".to_string());
        let response = AppError::ValidationError(errors).error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_id_error_response() {
        let response = AppError::InvalidId("xyz".to_string()).error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let response = AppError::NotFound("User not found".to_string()).error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_cancellation_errors_are_distinct() {
        assert_eq!(
            AppError::Cancelled("x".to_string()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::DeadlineExceeded("x".to_string()).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn test_store_and_hashing_errors_are_internal() {
        assert_eq!(
            AppError::DatabaseError("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::HashingError("bad cost".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_display_lists_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("firstNameError".to_string(), "too short".to_string());
        errors.insert("lastNameError".to_string(), "too short".to_string());

        let msg = AppError::ValidationError(errors).to_string();
        assert!(msg.contains("firstNameError: too short"));
        assert!(msg.contains("lastNameError: too short"));
    }
}
