//! # Core Infrastructure
//!
//! 서비스 전반에서 공유하는 기반 요소들입니다.
//!
//! - [`errors`] - 종류별로 구분되는 `AppError`와 HTTP 응답 매핑
//! - [`context`] - 저장소 작업에 전달되는 취소 가능한 `RequestContext`

pub mod context;
pub mod errors;

pub use context::*;
pub use errors::*;
