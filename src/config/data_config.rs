//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 저장소 작업, 서버 및 실행 환경 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 없으면 개발용 기본값을 사용합니다.

use std::env;
use std::time::Duration;

/// 실행 환경
///
/// `PROFILE` 환경 변수로 결정되며, 시작 시 어떤 `.env` 파일을 읽을지 정합니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `PROFILE` 환경 변수에서 현재 환경을 판별합니다. (기본값: dev)
    pub fn current() -> Self {
        Self::from_str(&env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()))
    }

    /// 알 수 없는 값은 개발 환경으로 취급합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Development,
        }
    }

    /// 환경 전용 설정 파일 이름
    ///
    /// `None`이면 기본 `.env` 파일을 사용합니다.
    pub fn env_file(&self) -> Option<&'static str> {
        match self {
            Environment::Development => Some(".env.dev"),
            Environment::Production => Some(".env.prod"),
            Environment::Test | Environment::Staging => None,
        }
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// `MONGODB_URI` (기본값: "mongodb://localhost:27017")
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// `DATABASE_NAME` (기본값: "hotel-reservation")
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "hotel-reservation".to_string())
    }
}

/// 저장소 작업 설정
pub struct StoreConfig;

impl StoreConfig {
    /// 요청당 저장소 작업 제한 시간
    ///
    /// `STORE_TIMEOUT_SECS` (기본값: 10초). 0 또는 파싱 불가 값이면 기본값을 사용합니다.
    pub fn op_timeout() -> Duration {
        let secs = env::var("STORE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(10);

        Duration::from_secs(secs)
    }
}

pub struct ServerConfig;

impl ServerConfig {
    /// `LISTEN_ADDR` (기본값: "localhost:5000")
    pub fn listen_addr() -> String {
        env::var("LISTEN_ADDR").unwrap_or_else(|_| "localhost:5000".to_string())
    }

    /// `SERVER_WORKERS` (기본값: 4)
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4)
    }
}

/// Rate Limiting 설정
#[derive(Debug)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn load() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("PROD"), Environment::Production);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("unknown"), Environment::Development);
    }

    #[test]
    fn test_environment_selects_env_file() {
        assert_eq!(Environment::Development.env_file(), Some(".env.dev"));
        assert_eq!(Environment::Production.env_file(), Some(".env.prod"));
        assert_eq!(Environment::Test.env_file(), None);
        assert_eq!(Environment::Staging.env_file(), None);
    }

    #[test]
    fn test_database_config_defaults() {
        if env::var("MONGODB_URI").is_err() {
            assert_eq!(DatabaseConfig::uri(), "mongodb://localhost:27017");
        }

        if env::var("DATABASE_NAME").is_err() {
            assert_eq!(DatabaseConfig::database_name(), "hotel-reservation");
        }
    }

    #[test]
    fn test_store_timeout_default() {
        if env::var("STORE_TIMEOUT_SECS").is_err() {
            assert_eq!(StoreConfig::op_timeout(), Duration::from_secs(10));
        }
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("LISTEN_ADDR").is_err() {
            assert_eq!(ServerConfig::listen_addr(), "localhost:5000");
        }

        if env::var("SERVER_WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }

    #[test]
    fn test_rate_limit_defaults() {
        if env::var("RATE_LIMIT_PER_SECOND").is_err() && env::var("RATE_LIMIT_BURST_SIZE").is_err() {
            let config = RateLimitConfig::load();
            assert_eq!(config.per_second, 100);
            assert_eq!(config.burst_size, 200);
        }
    }
}
