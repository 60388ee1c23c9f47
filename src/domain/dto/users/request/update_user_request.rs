//! # 사용자 수정 요청 DTO
//!
//! 이름 필드(`firstName`, `lastName`)의 부분 수정 요청을 표현합니다.
//!
//! ## 관대한 부분 수정 정책
//!
//! 각 필드를 독립적으로 판단합니다.
//!
//! - 값의 길이가 최소 길이(2)를 **초과**하면 수정 대상에 포함합니다.
//! - 그렇지 않으면 필드별 에러(`firstNameErr` / `lastNameErr`)를 기록하고 수정 대상에서 제외합니다.
//!
//! 두 필드 모두 제외되면 저장소를 호출하지 않고 에러만 반환하며, 하나라도 통과하면
//! 통과한 필드만 수정한 뒤 제외된 필드의 에러와 함께 수정 건수를 보고합니다.
//! 전부 아니면 전무(all-or-nothing) 방식이 아닌 점에 유의하세요.
//!
//! ```json
//! { "firstName": "A", "lastName": "Validlast" }
//! ```
//! 위 요청은 `lastName`만 수정하고 `firstNameErr`를 함께 반환합니다.

use serde::{Deserialize, Serialize};
use crate::core::errors::FieldErrors;
use crate::domain::dto::users::request::create_user_request::{MIN_FIRST_NAME_LEN, MIN_LAST_NAME_LEN};
use crate::repositories::users::user_store::UserUpdate;

/// 사용자 수정 파라미터
///
/// 누락된 필드는 빈 문자열과 동일하게 취급되어 에러로 기록됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateUserParams {
    /// 수정 정책을 적용하여 (수정할 필드 집합, 제외된 필드의 에러) 쌍을 만듭니다.
    pub fn into_update(self) -> (UserUpdate, FieldErrors) {
        let mut update = UserUpdate::default();
        let mut errors = FieldErrors::new();

        match self.first_name {
            Some(name) if name.chars().count() > MIN_FIRST_NAME_LEN => update.first_name = Some(name),
            _ => {
                errors.insert(
                    "firstNameErr".to_string(),
                    format!("first name must have at least {} characters", MIN_FIRST_NAME_LEN),
                );
            }
        }

        match self.last_name {
            Some(name) if name.chars().count() > MIN_LAST_NAME_LEN => update.last_name = Some(name),
            _ => {
                errors.insert(
                    "lastNameErr".to_string(),
                    format!("last name must have at least {} characters", MIN_LAST_NAME_LEN),
                );
            }
        }

        (update, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(first: Option<&str>, last: Option<&str>) -> UpdateUserParams {
        UpdateUserParams {
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    #[test]
    fn test_short_first_name_is_skipped_with_error() {
        let (update, errors) = params(Some("A"), Some("Validlast")).into_update();

        assert_eq!(update.first_name, None);
        assert_eq!(update.last_name.as_deref(), Some("Validlast"));
        assert!(errors.contains_key("firstNameErr"));
        assert!(!errors.contains_key("lastNameErr"));
    }

    #[test]
    fn test_both_valid() {
        let (update, errors) = params(Some("Harsh"), Some("Kumar")).into_update();

        assert!(errors.is_empty());
        assert_eq!(update.first_name.as_deref(), Some("Harsh"));
        assert_eq!(update.last_name.as_deref(), Some("Kumar"));
    }

    #[test]
    fn test_length_must_exceed_minimum() {
        // 생성 시에는 2자가 허용되지만 수정 시에는 거부됨
        let (update, errors) = params(Some("Al"), Some("Lee")).into_update();

        assert_eq!(update.first_name, None);
        assert_eq!(update.last_name.as_deref(), Some("Lee"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_missing_fields_yield_empty_update() {
        let (update, errors) = params(None, None).into_update();

        assert!(update.is_empty());
        assert!(errors.contains_key("firstNameErr"));
        assert!(errors.contains_key("lastNameErr"));
    }

    #[test]
    fn test_deserializes_partial_body() {
        let params: UpdateUserParams = serde_json::from_str(r#"{"lastName":"Validlast"}"#).unwrap();

        assert_eq!(params.first_name, None);
        assert_eq!(params.last_name.as_deref(), Some("Validlast"));
    }
}
