//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 정적 설정 구조체로 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 저장소 작업, 서버, 실행 환경 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export LISTEN_ADDR="localhost:5000"
//! export SERVER_WORKERS="4"
//!
//! # 데이터베이스 설정
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="hotel-reservation"
//!
//! # 저장소 작업 제한 시간 (초)
//! export STORE_TIMEOUT_SECS="10"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! `.env.dev` / `.env.prod` 파일은 `PROFILE` 값에 따라 `main`에서 로드됩니다.

pub mod data_config;

pub use data_config::*;
