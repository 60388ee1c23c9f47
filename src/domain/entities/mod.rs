//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속 엔티티들을 정의합니다.
//!
//! - **BSON 직렬화**: `serde`를 통한 자동 변환, 필드 이름은 camelCase
//! - **ObjectId 지원**: `_id` 필드는 [`users::UserId`] 값 타입으로 감싸서 노출

pub mod users;
