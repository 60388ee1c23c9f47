//! # Domain Layer Module
//!
//! 사용자 엔티티와 그 생성/수정 파라미터, 검증 및 파생 규칙을 담당하는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities   - User, UserId (영속 엔티티)
//! └── dto        - CreateUserParams, UpdateUserParams, UserResponse
//!      │
//!      ▼
//! Services ──▶ Repositories (UserStore)
//! ```
//!
//! ## 생명주기
//!
//! `CreateUserParams` → 검증 → `User` 생성(비밀번호 해싱) → 삽입(저장소가 `id` 할당)
//! → 이후 `firstName`/`lastName`만 수정 가능 → `id`로 삭제

pub mod dto;
pub mod entities;
