//! # Data Transfer Objects
//!
//! 전송 계층과 도메인 사이에서 오가는 데이터 구조입니다.
//! JSON 필드 이름은 camelCase(`firstName`, `lastName`)를 사용합니다.

pub mod users;
