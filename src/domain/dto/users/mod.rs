//! # User DTOs
//!
//! 사용자 도메인의 요청/응답 데이터 전송 객체입니다.
//!
//! ```text
//! HTTP JSON ──▶ request::{CreateUserParams, UpdateUserParams}
//!                   │
//!                   ▼
//!               entities::users::User ──▶ response::UserResponse ──▶ HTTP JSON
//! ```

pub mod request;
pub mod response;
