//! 데이터 액세스 계층 전역에서 사용하는 에러 시스템
//!
//! 리포지토리와 서비스 계층을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn load_product(id: &str) -> Result<Product, AppError> {
//!     let product = repository.find_by_id(id).await?
//!         .ok_or_else(|| AppError::DatabaseError("product missing".to_string()))?;
//!     Ok(product)
//! }
//! ```

use thiserror::Error;

/// 데이터 액세스 계층 전역 에러 타입
///
/// 저장소 연동 과정에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// "찾을 수 없음"은 에러가 아니라 `Ok(None)`으로 표현됩니다 — 단건 조회의
/// 호출자는 항상 `Option`을 확인해야 합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 연결 설정 에러 — 연결 URI 또는 데이터베이스 이름 누락/공백.
    /// 생성 시점에 즉시 실패하며 재시도하지 않습니다.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 잘못된 식별자 형식 에러 — 24자리 16진수 문자열이 아닌 ID.
    /// 저장소 호출 전에 검증되어 호출자에게 그대로 전달됩니다.
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// 데이터베이스 관련 에러 — 드라이버/전송 오류.
    /// 내부 재시도 없이 호출자에게 그대로 전파됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::ConfigurationError("database name is blank".to_string());
        assert_eq!(err.to_string(), "Configuration error: database name is blank");

        let err = AppError::InvalidId("not-hex".to_string());
        assert_eq!(err.to_string(), "Invalid id: not-hex");

        let err = AppError::DatabaseError("connection reset".to_string());
        assert_eq!(err.to_string(), "Database error: connection reset");
    }
}
