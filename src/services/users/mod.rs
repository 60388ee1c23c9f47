//! 사용자 관리 서비스 모듈
//!
//! [`UserService`](user_service::UserService)는 검증, 엔티티 생성, 저장소 호출을 조합하여
//! 사용자 CRUD 유스케이스를 제공합니다.

pub mod user_service;

pub use user_service::UserService;
