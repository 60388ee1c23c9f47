//! # MongoDB 사용자 저장소
//!
//! [`UserStore`]의 MongoDB 구현체입니다. `users` 컬렉션의 문서를 대상으로 하며,
//! 문자열 식별자는 [`UserId`]로 파싱된 뒤 네이티브 `ObjectId`로 질의됩니다.
//!
//! - 문서 단위 원자성은 MongoDB가 보장하며, 문서 간 트랜잭션은 사용하지 않습니다.
//! - MongoDB 클라이언트는 커넥션 풀 기반으로 동시 요청에서 공유해도 안전합니다.
//! - 드라이버 에러는 모두 `AppError::DatabaseError`로 변환됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use crate::{
    core::{
        context::RequestContext,
        errors::{AppError, AppResult},
    },
    db::Database,
    domain::entities::users::user::{User, UserId},
    repositories::users::user_store::{USER_COLLECTION, UserFilter, UserStore, UserUpdate},
};

fn database_error(e: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(e.to_string())
}

pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    /// 주입된 데이터베이스 핸들로부터 저장소를 생성합니다.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(USER_COLLECTION),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn get_user_by_id(&self, ctx: &RequestContext, id: &str) -> AppResult<User> {
        let user_id = UserId::parse(id)?;

        ctx.run("get_user_by_id", async {
            self.collection
                .find_one(doc! { "_id": user_id })
                .await
                .map_err(database_error)?
                .ok_or_else(|| AppError::NotFound(format!("user {} not found", user_id)))
        })
        .await
    }

    async fn get_users(&self, ctx: &RequestContext) -> AppResult<Vec<User>> {
        ctx.run("get_users", async {
            let cursor = self.collection.find(doc! {}).await.map_err(database_error)?;
            cursor.try_collect::<Vec<User>>().await.map_err(database_error)
        })
        .await
    }

    async fn insert_user(&self, ctx: &RequestContext, mut user: User) -> AppResult<User> {
        ctx.run("insert_user", async move {
            let result = self
                .collection
                .insert_one(&user)
                .await
                .map_err(database_error)?;

            let oid = result.inserted_id.as_object_id().ok_or_else(|| {
                AppError::DatabaseError(format!(
                    "inserted id is not an ObjectId: {}",
                    result.inserted_id
                ))
            })?;
            user.id = Some(UserId::from(oid));

            log::debug!("inserted user {}", oid.to_hex());
            Ok(user)
        })
        .await
    }

    async fn delete_user(&self, ctx: &RequestContext, id: &str) -> AppResult<u64> {
        let user_id = UserId::parse(id)?;

        ctx.run("delete_user", async {
            let result = self
                .collection
                .delete_one(doc! { "_id": user_id })
                .await
                .map_err(database_error)?;

            Ok(result.deleted_count)
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
            // 빈 $set 은 서버가 거부함
            if update.is_empty() {
                return Ok(0);
            }

            let result = self
                .collection
                .update_one(filter.to_document(), doc! { "$set": update.to_set_document() })
                .await
                .map_err(database_error)?;

            Ok(result.modified_count)
        })
        .await
    }
}
