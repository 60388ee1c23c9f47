//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/user` | 새 사용자 생성 | 201 Created / 400 (필드 에러 맵) |
//! | `GET` | `/api/v1/user` | 전체 사용자 조회 | 200 OK |
//! | `GET` | `/api/v1/user/{id}` | 사용자 조회 | 200 OK / 400 / 404 |
//! | `PUT` | `/api/v1/user/{id}` | 이름 부분 수정 | 200 OK / 400 |
//! | `DELETE` | `/api/v1/user/{id}` | 사용자 삭제 | 200 OK / 400 |
//!
//! 에러는 [`AppError`]의 `ResponseError` 구현을 통해 종류별 상태 코드로 변환됩니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use crate::core::context::RequestContext;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserParams, UpdateUserParams};
use crate::domain::dto::users::response::DeleteUserResponse;
use crate::services::users::user_service::UserService;

/// 사용자 생성 핸들러
///
/// ```bash
/// curl -X POST http://localhost:5000/api/v1/user \
///   -H "Content-Type: application/json" \
///   -d '{"firstName":"Harsh","lastName":"Kumar","email":"harsh@example.com","password":"supersecret"}'
/// ```
///
/// 검증 실패 시 400과 함께 `{"firstNameError": "...", ...}` 형태의 맵을 반환합니다.
#[post("")]
pub async fn create_user(
    ctx: RequestContext,
    service: web::Data<UserService>,
    payload: web::Json<CreateUserParams>,
) -> Result<HttpResponse, AppError> {
    let user = service.create_user(&ctx, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

#[get("")]
pub async fn list_users(
    ctx: RequestContext,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_users(&ctx).await?;

    Ok(HttpResponse::Ok().json(users))
}

#[get("/{user_id}")]
pub async fn get_user(
    ctx: RequestContext,
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&ctx, &user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 핸들러
///
/// 존재하지 않는 사용자 삭제는 에러가 아니며 `{"deleted": 0, "error": "No user found"}`를 반환합니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    ctx: RequestContext,
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let deleted = service.delete_user(&ctx, &user_id).await?;

    Ok(HttpResponse::Ok().json(DeleteUserResponse::from_count(deleted)))
}

/// 사용자 수정 핸들러
///
/// 통과한 필드만 수정되며, 응답에는 `modified` 건수와 제외된 필드의 에러가 함께 담깁니다.
///
/// ```json
/// { "modified": 1, "firstNameErr": "first name must have at least 2 characters" }
/// ```
#[put("/{user_id}")]
pub async fn update_user(
    ctx: RequestContext,
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserParams>,
) -> Result<HttpResponse, AppError> {
    let outcome = service
        .update_user(&ctx, &user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(outcome))
}
