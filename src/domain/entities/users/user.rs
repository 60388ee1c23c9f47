//! User Entity Implementation
//!
//! 사용자 엔티티와 저장소 식별자 타입의 핵심 구현체입니다.
//!
//! - [`UserId`] - MongoDB `ObjectId`를 감싼 불투명(opaque) 식별자
//! - [`User`] - `users` 컬렉션에 저장되는 문서
//!
//! 생성 파라미터에서 엔티티를 만들 때 비밀번호는 bcrypt(cost 12)로 해싱되며,
//! 평문 비밀번호는 엔티티에 남지 않습니다.

use std::fmt;
use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::CreateUserParams;

/// 비밀번호 해싱에 사용하는 bcrypt work factor
pub const BCRYPT_COST: u32 = 12;

/// 사용자 식별자
///
/// 호출자에게는 24자리 16진수 문자열로만 노출되며, 저장소에는 네이티브 `ObjectId`로 저장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(ObjectId);

impl UserId {
    /// 새 식별자를 생성합니다. (저장소가 삽입 시점에 할당하는 용도)
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// 16진수 문자열을 식별자로 파싱합니다.
    ///
    /// # 에러
    ///
    /// * `AppError::InvalidId` - 24자리 16진수가 아닌 경우
    pub fn parse(id: &str) -> AppResult<Self> {
        ObjectId::parse_str(id)
            .map(Self)
            .map_err(|_| AppError::InvalidId(format!("'{}' is not a valid user id", id)))
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for UserId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<UserId> for Bson {
    fn from(id: UserId) -> Self {
        Bson::ObjectId(id.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// 사용자 엔티티
///
/// `id`는 최초 삽입 전까지 `None`이며, 그 외 필드는 항상 채워져 있습니다.
/// `encrypted_password`는 생성 시 한 번만 기록되며 외부 응답에는 포함되지 않습니다
/// ([`UserResponse`](crate::domain::dto::users::response::UserResponse) 참고).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub encrypted_password: String,
}

impl User {
    /// 생성 파라미터로부터 새 사용자를 만듭니다.
    ///
    /// 이름과 이메일은 그대로 복사되고, 비밀번호는 [`BCRYPT_COST`]로 해싱됩니다.
    /// 검증은 호출자 책임이며 이 함수는 검증을 다시 수행하지 않습니다.
    ///
    /// # 에러
    ///
    /// * `AppError::HashingError` - bcrypt 해싱 실패
    pub fn from_params(params: CreateUserParams) -> AppResult<Self> {
        Self::from_params_with_cost(params, BCRYPT_COST)
    }

    /// work factor를 직접 지정하여 사용자를 만듭니다.
    pub fn from_params_with_cost(params: CreateUserParams, cost: u32) -> AppResult<Self> {
        let CreateUserParams {
            first_name,
            last_name,
            email,
            password,
        } = params;

        let encrypted_password = bcrypt::hash(&password, cost)
            .map_err(|e| AppError::HashingError(format!("비밀번호 해싱 실패: {}", e)))?;

        Ok(Self {
            id: None,
            first_name,
            last_name,
            email,
            encrypted_password,
        })
    }

    /// 후보 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 손상된 경우에도 `false`를 반환합니다.
    pub fn verify_password(&self, candidate: &str) -> bool {
        bcrypt::verify(candidate, &self.encrypted_password).unwrap_or(false)
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    // 테스트 속도를 위해 최소 cost 사용
    const TEST_COST: u32 = 4;

    fn params(password: &str) -> CreateUserParams {
        CreateUserParams {
            first_name: "Harsh".to_string(),
            last_name: "Kumar".to_string(),
            email: "harsh@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_user_id_parse_roundtrip() {
        let id = UserId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_user_id_parse_rejects_malformed() {
        for bad in ["", "xyz", "507f1f77bcf86cd79943901", "507f1f77bcf86cd79943901g"] {
            assert!(matches!(UserId::parse(bad), Err(AppError::InvalidId(_))), "{bad}");
        }
    }

    #[test]
    fn test_from_params_copies_fields_and_leaves_id_unset() {
        let user = User::from_params_with_cost(params("supersecret"), TEST_COST).unwrap();

        assert!(user.id.is_none());
        assert_eq!(user.first_name, "Harsh");
        assert_eq!(user.last_name, "Kumar");
        assert_eq!(user.email, "harsh@example.com");
    }

    #[test]
    fn test_password_is_hashed_and_verifiable() {
        let user = User::from_params_with_cost(params("supersecret"), TEST_COST).unwrap();

        assert_ne!(user.encrypted_password, "supersecret");
        assert!(user.verify_password("supersecret"));
        assert!(!user.verify_password("supersecret2"));
        assert!(!user.verify_password(""));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = User::from_params_with_cost(params("supersecret"), TEST_COST).unwrap();
        let b = User::from_params_with_cost(params("supersecret"), TEST_COST).unwrap();

        assert_ne!(a.encrypted_password, b.encrypted_password);
    }

    #[test]
    fn test_from_params_uses_cost_twelve() {
        let user = User::from_params(params("supersecret")).unwrap();

        assert!(user.encrypted_password.starts_with("$2b$12$"));
        assert!(user.verify_password("supersecret"));
    }

    #[test]
    fn test_invalid_cost_is_hashing_error() {
        let result = User::from_params_with_cost(params("supersecret"), 2);

        assert!(matches!(result, Err(AppError::HashingError(_))));
    }

    #[test]
    fn test_bson_field_names() {
        let mut user = User::from_params_with_cost(params("supersecret"), TEST_COST).unwrap();
        let doc = bson::to_document(&user).unwrap();
        assert!(!doc.contains_key("_id"));
        assert!(doc.contains_key("firstName"));
        assert!(doc.contains_key("lastName"));
        assert!(doc.contains_key("encryptedPassword"));

        user.id = Some(UserId::generate());
        let doc = bson::to_document(&user).unwrap();
        assert!(doc.get_object_id("_id").is_ok());
    }
}
