//! # Service Layer
//!
//! 비즈니스 로직을 담당하는 서비스 계층입니다.
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 핸들러에 주입됩니다.

pub mod users;
