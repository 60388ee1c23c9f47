//! # 사용자 저장소 계약
//!
//! 도메인/전송 계층은 특정 저장 기술이 아닌 [`UserStore`] trait에만 의존합니다.
//! 구현체는 프로세스 시작 시 한 번 생성되어 `Arc<dyn UserStore>`로 주입됩니다.
//!
//! | 연산 | 결과 | 에러 |
//! |------|------|------|
//! | `get_user_by_id` | 정확히 한 명의 사용자 | `InvalidId`, `NotFound`, `DatabaseError` |
//! | `get_users` | 전체 사용자 (빈 컬렉션이면 빈 `Vec`) | `DatabaseError` |
//! | `insert_user` | `id`가 할당된 사용자 | `DatabaseError` |
//! | `delete_user` | 삭제 건수 (0 또는 1) | `InvalidId`, `DatabaseError` |
//! | `update_user` | 실제 수정된 문서 수 | `DatabaseError` |
//!
//! 모든 연산은 첫 번째 인자로 [`RequestContext`]를 받으며, 취소/제한 시간 초과 시
//! `Cancelled` / `DeadlineExceeded`로 즉시 중단됩니다. 재시도는 하지 않습니다.

use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use crate::core::context::RequestContext;
use crate::core::errors::AppResult;
use crate::domain::entities::users::user::{User, UserId};

/// `users` 컬렉션 이름
pub const USER_COLLECTION: &str = "users";

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user_by_id(&self, ctx: &RequestContext, id: &str) -> AppResult<User>;

    async fn get_users(&self, ctx: &RequestContext) -> AppResult<Vec<User>>;

    /// 사용자를 저장하고 저장소가 생성한 `id`를 채운 사본을 반환합니다.
    ///
    /// 이메일 중복 등의 정책은 이 계층에서 검사하지 않습니다.
    async fn insert_user(&self, ctx: &RequestContext, user: User) -> AppResult<User>;

    async fn delete_user(&self, ctx: &RequestContext, id: &str) -> AppResult<u64>;

    /// `filter`에 일치하는 문서 하나에 `$set` 부분 수정을 적용합니다.
    ///
    /// 값 검증은 호출 계층의 책임입니다. 일치하는 문서가 없거나 값이 바뀌지 않았으면 0을 반환합니다.
    async fn update_user(
        &self,
        ctx: &RequestContext,
        filter: &UserFilter,
        update: &UserUpdate,
    ) -> AppResult<u64>;
}

/// 수정 대상 문서를 고르는 필터
#[derive(Debug, Clone, PartialEq)]
pub enum UserFilter {
    ById(UserId),
    /// HTTP 수정 경로는 `ById`만 사용하며, 이메일 기준 수정이 필요한 호출자를 위한 필터입니다.
    ByEmail(String),
}

impl UserFilter {
    pub fn to_document(&self) -> Document {
        match self {
            UserFilter::ById(id) => doc! { "_id": *id },
            UserFilter::ByEmail(email) => doc! { "email": email.as_str() },
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        match self {
            UserFilter::ById(id) => user.id.as_ref() == Some(id),
            UserFilter::ByEmail(email) => user.email == *email,
        }
    }
}

/// set-only 부분 수정 필드 집합
///
/// `None`인 필드는 그대로 유지됩니다. `encryptedPassword`는 수정 대상이 아닙니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }

    /// `$set` 연산자에 들어갈 문서를 만듭니다.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(first_name) = &self.first_name {
            set.insert("firstName", first_name.as_str());
        }
        if let Some(last_name) = &self.last_name {
            set.insert("lastName", last_name.as_str());
        }
        set
    }

    /// 사용자에 수정 사항을 적용하고, 실제로 값이 바뀌었는지 반환합니다.
    pub fn apply_to(&self, user: &mut User) -> bool {
        let mut changed = false;

        if let Some(first_name) = &self.first_name {
            if user.first_name != *first_name {
                user.first_name = first_name.clone();
                changed = true;
            }
        }
        if let Some(last_name) = &self.last_name {
            if user.last_name != *last_name {
                user.last_name = last_name.clone();
                changed = true;
            }
        }

        changed
    }
}
