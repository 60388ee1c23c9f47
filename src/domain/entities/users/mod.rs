//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let errors = params.field_errors();
//! if errors.is_empty() {
//!     let user = User::from_params(params)?; // bcrypt cost 12
//! }
//! ```

pub mod user;

pub use user::{User, UserId, BCRYPT_COST};
