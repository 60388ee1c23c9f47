//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 도메인 파라미터로 파싱하고 서비스를 호출한 뒤 결과를 JSON으로 직렬화하는
//! 얇은 전송 계층입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증, 엔티티 생성, 수정 정책           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore (MongoDB / memory)   ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 요청 컨텍스트
//!
//! 모든 핸들러는 [`RequestContext`]를 추출자로 받습니다. 앱에 [`RequestTimeout`]이
//! 등록되어 있으면 해당 시간이 저장소 작업의 deadline이 되고, 클라이언트가 연결을 끊으면
//! 핸들러 future가 drop되면서 진행 중인 작업도 함께 중단됩니다.

use std::future::{Ready, ready};
use std::time::Duration;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use crate::core::context::RequestContext;

pub mod users;

/// 요청당 저장소 작업 제한 시간 (앱 데이터로 등록)
#[derive(Debug, Clone, Copy)]
pub struct RequestTimeout(pub Duration);

impl FromRequest for RequestContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let ctx = match req.app_data::<web::Data<RequestTimeout>>() {
            Some(timeout) => RequestContext::with_timeout(timeout.0),
            None => RequestContext::new(),
        };

        ready(Ok(ctx))
    }
}
