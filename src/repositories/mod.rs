//! 데이터 액세스 계층을 담당하는 저장소 모듈
//!
//! 저장소 구현체는 전역 상태가 아니라 `main`에서 한 번 생성되어
//! 서비스 계층에 명시적으로 주입됩니다.

pub mod users;
