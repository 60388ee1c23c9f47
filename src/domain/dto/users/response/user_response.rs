use serde::{Deserialize, Serialize};
use crate::core::errors::FieldErrors;
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 외부로 나가는 사용자 표현입니다. `encryptedPassword`는 포함되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            email,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name,
            last_name,
            email,
        }
    }
}

/// 사용자 삭제 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub deleted: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeleteUserResponse {
    pub fn from_count(deleted: u64) -> Self {
        Self {
            deleted,
            error: (deleted == 0).then(|| "No user found".to_string()),
        }
    }
}

/// 사용자 수정 결과
///
/// 실제로 수정된 문서 수와, 정책에 의해 제외된 필드의 에러를 함께 담습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub modified: u64,
    #[serde(flatten)]
    pub errors: FieldErrors,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::UserId;

    #[test]
    fn test_response_never_contains_password() {
        let user = User {
            id: Some(UserId::parse("507f1f77bcf86cd799439011").unwrap()),
            first_name: "Harsh".to_string(),
            last_name: "Kumar".to_string(),
            email: "harsh@example.com".to_string(),
            encrypted_password: "$2b$12$hash".to_string(),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["id"], "507f1f77bcf86cd799439011");
        assert_eq!(json["firstName"], "Harsh");
        assert!(json.get("encryptedPassword").is_none());
        assert!(!json.to_string().contains("$2b$12$hash"));
    }

    #[test]
    fn test_delete_response_reports_missing_user() {
        let json = serde_json::to_value(DeleteUserResponse::from_count(0)).unwrap();
        assert_eq!(json["deleted"], 0);
        assert_eq!(json["error"], "No user found");

        let json = serde_json::to_value(DeleteUserResponse::from_count(1)).unwrap();
        assert_eq!(json["deleted"], 1);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_update_outcome_flattens_errors() {
        let mut errors = FieldErrors::new();
        errors.insert("firstNameErr".to_string(), "too short".to_string());

        let json = serde_json::to_value(UpdateOutcome { modified: 1, errors }).unwrap();
        assert_eq!(json["modified"], 1);
        assert_eq!(json["firstNameErr"], "too short");
    }
}
