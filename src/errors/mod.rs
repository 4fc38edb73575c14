//! 에러 처리 모듈
//!
//! 데이터 액세스 계층 전역에서 사용하는 [`AppError`](errors::AppError)와
//! [`AppResult`](errors::AppResult)를 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult};
