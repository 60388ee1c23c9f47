//! 사용자 데이터 액세스 계층을 담당하는 저장소 모듈
//!
//! - [`user_store`] - [`UserStore`] trait, 필터/부분 수정 타입
//! - [`mongo_user_store`] - MongoDB `users` 컬렉션 구현
//! - [`memory_user_store`] - 개발/테스트용 in-memory 구현
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserStore, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(MongoUserStore::new(&database));
//! let users = store.get_users(&ctx).await?;
//! ```

pub mod memory_user_store;
pub mod mongo_user_store;
pub mod user_store;

pub use memory_user_store::InMemoryUserStore;
pub use mongo_user_store::MongoUserStore;
pub use user_store::{UserFilter, UserStore, UserUpdate};
