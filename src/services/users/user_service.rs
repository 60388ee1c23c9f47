//! # 사용자 관리 서비스 구현
//!
//! 요청 처리 계층이 호출하는 사용자 유스케이스를 구현합니다.
//! 저장소는 `Arc<dyn UserStore>`로 주입되므로 MongoDB 구현과 in-memory 구현을 자유롭게 바꿀 수 있습니다.
//!
//! ```text
//! Handlers ──▶ UserService ──▶ dyn UserStore ──▶ MongoDB / In-memory
//!                  │
//!                  └── CreateUserParams::field_errors / User::from_params / UpdateUserParams::into_update
//! ```
//!
//! ## 비밀번호 보안
//!
//! - **bcrypt 해싱**: cost 12 고정, 솔트 자동 생성
//! - **블로킹 풀 사용**: 해싱은 `web::block`에서 수행되어 워커 스레드를 막지 않음
//! - **평문 미보관**: 해싱 직후 평문 비밀번호는 버려짐
//!
//! ## 수정 정책
//!
//! `update_user`는 필드별로 관대한 부분 수정을 수행합니다
//! ([`UpdateUserParams`] 참고). 이 동작은 관찰 가능한 기존 동작이므로 유지합니다.

use std::sync::Arc;
use actix_web::web;
use crate::{
    core::{
        context::RequestContext,
        errors::{AppError, AppResult},
    },
    domain::{
        dto::users::{
            request::{CreateUserParams, UpdateUserParams},
            response::{UpdateOutcome, UserResponse},
        },
        entities::users::user::{BCRYPT_COST, User, UserId},
    },
    repositories::users::user_store::{UserFilter, UserStore},
};

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self::with_bcrypt_cost(store, BCRYPT_COST)
    }

    pub fn with_bcrypt_cost(store: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// 사용자를 검증, 생성, 저장합니다.
    ///
    /// 검증 에러가 하나라도 있으면 `AppError::ValidationError`로 모든 에러를 반환하며
    /// 저장소는 호출되지 않습니다.
    pub async fn create_user(
        &self,
        ctx: &RequestContext,
        params: CreateUserParams,
    ) -> AppResult<UserResponse> {
        let start_time = std::time::Instant::now();

        let errors = params.field_errors();
        if !errors.is_empty() {
            log::debug!("create_user rejected: {:?}", errors.keys().collect::<Vec<_>>());
            return Err(AppError::ValidationError(errors));
        }

        let cost = self.bcrypt_cost;
        let hash_start = std::time::Instant::now();
        let user = web::block(move || User::from_params_with_cost(params, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("blocking pool error: {}", e)))??;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let created = self.store.insert_user(ctx, user).await?;

        log::info!(
            "Total user creation took: {:?} (id={})",
            start_time.elapsed(),
            created.id_string().unwrap_or_default()
        );

        Ok(UserResponse::from(created))
    }

    pub async fn get_user(&self, ctx: &RequestContext, id: &str) -> AppResult<UserResponse> {
        let user = self.store.get_user_by_id(ctx, id).await?;

        Ok(UserResponse::from(user))
    }

    pub async fn list_users(&self, ctx: &RequestContext) -> AppResult<Vec<UserResponse>> {
        let users = self.store.get_users(ctx).await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 삭제된 문서 수를 반환합니다. 존재하지 않는 사용자는 에러가 아니라 0입니다.
    pub async fn delete_user(&self, ctx: &RequestContext, id: &str) -> AppResult<u64> {
        let deleted = self.store.delete_user(ctx, id).await?;

        if deleted == 0 {
            log::info!("delete_user: no user with id {}", id);
        }

        Ok(deleted)
    }

    /// 이름 필드를 관대한 정책으로 부분 수정합니다.
    ///
    /// - 수정 가능한 필드가 하나도 없으면 저장소를 호출하지 않고 `ValidationError`를 반환합니다.
    /// - 그렇지 않으면 통과한 필드만 수정하고, 수정 건수와 제외된 필드의 에러를 함께 반환합니다.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        id: &str,
        params: UpdateUserParams,
    ) -> AppResult<UpdateOutcome> {
        let user_id = UserId::parse(id)?;

        let (update, errors) = params.into_update();
        if update.is_empty() {
            return Err(AppError::ValidationError(errors));
        }

        let modified = self
            .store
            .update_user(ctx, &UserFilter::ById(user_id), &update)
            .await?;

        if !errors.is_empty() {
            log::warn!(
                "update_user {} applied partially, skipped: {:?}",
                user_id,
                errors.keys().collect::<Vec<_>>()
            );
        }

        Ok(UpdateOutcome { modified, errors })
    }
}
