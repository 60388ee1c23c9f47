//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 요청 데이터 구조를 정의합니다.
//! 요청 본문은 한 번 소비되어 [`User`](crate::domain::entities::users::user::User)를 만드는 데 쓰이며,
//! 그 자체로는 저장되지 않습니다.
//!
//! ## 검증 규칙
//!
//! 모든 규칙은 독립적으로 검사됩니다. 하나가 실패해도 나머지 규칙은 계속 검사되며,
//! 위반된 규칙마다 하나의 항목이 에러 맵에 추가됩니다.
//!
//! | 필드 | 규칙 | 에러 키 |
//! |------|------|---------|
//! | `firstName` | 2자 이상 | `firstNameError` |
//! | `lastName` | 2자 이상 | `lastNameError` |
//! | `password` | 7자 이상 | `passwordError` |
//! | `email` | 이메일 문법 (최상위 도메인 필수) | `emailError` |
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "firstName": "Harsh",
//!   "lastName": "Kumar",
//!   "email": "harsh@example.com",
//!   "password": "supersecret"
//! }
//! ```

use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::core::errors::FieldErrors;

pub const MIN_FIRST_NAME_LEN: usize = 2;
pub const MIN_LAST_NAME_LEN: usize = 2;

/// local-part `@` label(.label)+
///
/// 각 label은 영숫자/하이픈 1-63자이며 하이픈으로 시작하거나 끝날 수 없습니다.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email regex must compile")
});

/// 사용자 생성 파라미터
#[derive(Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserParams {
    #[validate(length(
        min = 2,
        code = "firstNameError",
        message = "first name must have at least 2 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 2,
        code = "lastNameError",
        message = "last name must have at least 2 characters"
    ))]
    pub last_name: String,

    #[validate(custom(function = "validate_email_grammar"))]
    pub email: String,

    /// 평문 비밀번호 (해싱 후 폐기)
    #[validate(length(
        min = 7,
        code = "passwordError",
        message = "password must have at least 7 characters"
    ))]
    pub password: String,
}

impl fmt::Debug for CreateUserParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserParams")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl CreateUserParams {
    /// 모든 규칙을 검사하여 에러 키 → 메시지 맵을 반환합니다.
    ///
    /// 빈 맵이면 검증 성공이며, 항목이 하나라도 있으면 호출자는 사용자 생성을 진행해서는 안 됩니다.
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if let Err(e) = Validate::validate(self) {
            for field_errors in e.field_errors().into_values() {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    errors.insert(error.code.to_string(), message);
                }
            }
        }

        errors
    }
}

/// 이메일 문법을 검사합니다. 최상위 도메인이 없는 주소(`a@b`)는 거부됩니다.
pub fn is_email_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn validate_email_grammar(email: &str) -> Result<(), ValidationError> {
    if !is_email_valid(email) {
        return Err(ValidationError::new("emailError")
            .with_message("email address is invalid".into()));
    }
    Ok(())
}
