//! 사용자 관리 서비스 백엔드
//!
//! MongoDB에 사용자 레코드를 생성/조회/수정/삭제하는 서비스입니다.
//! 생성 시 입력값을 검증하고 비밀번호를 bcrypt로 해싱합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/v1/user
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 직렬화, RequestContext 추출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 엔티티 생성, 부분 수정 정책
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  dyn UserStore  │ ← MongoDB / In-memory
//! └─────────────────┘
//! ```
//!
//! 저장소 클라이언트는 프로세스 시작 시 한 번 생성되어 명시적으로 주입되며,
//! 전역 상태를 사용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::core::RequestContext;
//! use user_service_backend::repositories::users::InMemoryUserStore;
//! use user_service_backend::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserStore::new()));
//! let user = service.create_user(&RequestContext::new(), params).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
