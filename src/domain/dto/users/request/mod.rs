//! # User Request DTOs
//!
//! 사용자 관련 요청 데이터 구조입니다. 두 파라미터 모두 일시적인 입력이며 저장되지 않습니다.
//!
//! - [`CreateUserParams`] - 사용자 생성 (필드 검증 포함)
//! - [`UpdateUserParams`] - 이름 필드 부분 수정 (관대한 수정 정책)

pub mod create_user_request;
pub mod update_user_request;

pub use create_user_request::CreateUserParams;
pub use update_user_request::UpdateUserParams;
