//! # User Response DTOs
//!
//! 외부로 직렬화되는 사용자 관련 응답 구조입니다.
//! 비밀번호 해시 등 민감한 정보는 어떤 응답에도 포함되지 않습니다.

pub mod user_response;

pub use user_response::{DeleteUserResponse, UpdateOutcome, UserResponse};
