//! 사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 연결과 사용자 저장소/서비스를 한 번 생성한 뒤 `web::Data`로 명시적으로 주입합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service_backend::config::{
    DatabaseConfig, Environment, RateLimitConfig, ServerConfig, StoreConfig,
};
use user_service_backend::db::Database;
use user_service_backend::handlers::RequestTimeout;
use user_service_backend::repositories::users::{MongoUserStore, UserStore};
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    init_logging();
    let environment = Environment::current();
    load_env_file(environment);

    info!("🚀 사용자 관리 서비스 시작중... ({:?})", environment);

    // 데이터 스토어 초기화
    let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name())
        .await
        .map_err(|e| {
            error!("데이터베이스 연결 실패: {}", e);
            std::io::Error::other(e.to_string())
        })?;

    let store: Arc<dyn UserStore> = Arc::new(MongoUserStore::new(&database));
    let user_service = web::Data::new(UserService::new(store));
    let request_timeout = web::Data::new(RequestTimeout(StoreConfig::op_timeout()));

    start_http_server(user_service, request_timeout).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_service: web::Data<UserService>,
    request_timeout: web::Data<RequestTimeout>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::listen_addr();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/user", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    info!("Rate Limiting 설정 로드됨: {:?}", rate_limit_config);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("invalid rate limit configuration"))?;

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .app_data(request_timeout.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address.as_str())?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * `PROFILE=test` / `PROFILE=staging` - 기본 .env 파일 로드
fn load_env_file(environment: Environment) {
    info!("Current profile: {:?}", environment);

    match environment.env_file() {
        Some(file) => match dotenv::from_filename(file) {
            Ok(_) => info!("{} 파일 로드 됨", file),
            Err(e) => error!("{} 파일 로드 실패: {}", file, e),
        },
        None => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
