//! # In-memory 사용자 저장소
//!
//! 개발 및 테스트용 [`UserStore`] 구현체입니다. MongoDB 구현과 동일한 의미를 가지며,
//! 식별자는 새 `ObjectId`로 생성됩니다.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::{
    core::{
        context::RequestContext,
        errors::{AppError, AppResult},
    },
    domain::entities::users::user::{User, UserId},
    repositories::users::user_store::{UserFilter, UserStore, UserUpdate},
};

#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_user_by_id(&self, ctx: &RequestContext, id: &str) -> AppResult<User> {
        let user_id = UserId::parse(id)?;

        ctx.run("get_user_by_id", async {
            self.users
                .read()
                .await
                .get(&user_id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("user {} not found", user_id)))
        })
        .await
    }

    async fn get_users(&self, ctx: &RequestContext) -> AppResult<Vec<User>> {
        ctx.run("get_users", async {
            Ok(self.users.read().await.values().cloned().collect())
        })
        .await
    }

    async fn insert_user(&self, ctx: &RequestContext, mut user: User) -> AppResult<User> {
        ctx.run("insert_user", async move {
            let mut users = self.users.write().await;

            let id = *user.id.get_or_insert_with(UserId::generate);
            if users.contains_key(&id) {
                return Err(AppError::DatabaseError(format!("duplicate key: {}", id)));
            }
            users.insert(id, user.clone());

            log::debug!("inserted user {}", id);
            Ok(user)
        })
        .await
    }

    async fn delete_user(&self, ctx: &RequestContext, id: &str) -> AppResult<u64> {
        let user_id = UserId::parse(id)?;

        ctx.run("delete_user", async {
            let removed = self.users.write().await.remove(&user_id);
            Ok(u64::from(removed.is_some()))
        })
        .await
    }

    async fn update_user(
        &self,
        ctx: &RequestContext,
        filter: &UserFilter,
        update: &UserUpdate,
    ) -> AppResult<u64> {
        ctx.run("update_user", async {
            let mut users = self.users.write().await;

            let modified = users
                .values_mut()
                .find(|user| filter.matches(user))
                .map(|user| update.apply_to(user))
                .unwrap_or(false);

            Ok(u64::from(modified))
        })
        .await
    }
}
