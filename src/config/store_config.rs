//! 저장소 연결 설정 관리 모듈
//!
//! MongoDB 연결에 필요한 설정값을 관리합니다.
//! 설정값은 생성 시점에 검증되며, 누락되거나 공백인 값은
//! 즉시 [`AppError::ConfigurationError`]로 실패합니다.

use std::env;

use crate::errors::errors::{AppError, AppResult};

/// 환경 변수: MongoDB 연결 URI
pub const ENV_MONGODB_URI: &str = "MONGODB_URI";
/// 환경 변수: 사용할 데이터베이스 이름
pub const ENV_DATABASE_NAME: &str = "DATABASE_NAME";

/// MongoDB 저장소 연결 설정
///
/// 연결 URI와 데이터베이스 이름 두 가지 필수 값을 담습니다.
/// 두 값 모두 공백이 아니어야 하며, 검증은 생성자에서 단 한 번 수행됩니다.
/// 검증에 실패한 설정으로는 어떠한 저장소 연결도 시도되지 않습니다.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// MongoDB 연결 URI (예: `mongodb://localhost:27017`)
    connection_uri: String,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl StoreSettings {
    /// 새 저장소 설정을 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `connection_uri` - MongoDB 연결 URI
    /// * `database_name` - 데이터베이스 이름
    ///
    /// # Errors
    ///
    /// 두 값 중 하나라도 공백이면 `AppError::ConfigurationError`를 반환합니다.
    pub fn new(
        connection_uri: impl Into<String>,
        database_name: impl Into<String>,
    ) -> AppResult<Self> {
        let connection_uri = connection_uri.into();
        let database_name = database_name.into();

        if connection_uri.trim().is_empty() {
            return Err(AppError::ConfigurationError(
                "connection URI is missing or blank".to_string(),
            ));
        }

        if database_name.trim().is_empty() {
            return Err(AppError::ConfigurationError(
                "database name is missing or blank".to_string(),
            ));
        }

        Ok(Self {
            connection_uri,
            database_name,
        })
    }

    /// 환경 변수에서 저장소 설정을 읽어옵니다.
    ///
    /// `MONGODB_URI`와 `DATABASE_NAME` 환경 변수를 사용하며,
    /// 환경 변수 기반 로딩도 동일한 공백 검증을 거칩니다.
    ///
    /// # Errors
    ///
    /// 환경 변수가 없거나 공백이면 `AppError::ConfigurationError`를 반환합니다.
    pub fn from_env() -> AppResult<Self> {
        let connection_uri = env::var(ENV_MONGODB_URI).unwrap_or_default();
        let database_name = env::var(ENV_DATABASE_NAME).unwrap_or_default();

        Self::new(connection_uri, database_name)
    }

    /// MongoDB 연결 URI를 반환합니다.
    pub fn connection_uri(&self) -> &str {
        &self.connection_uri
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_settings() {
        let settings = StoreSettings::new("mongodb://localhost:27017", "catalog_dev")
            .expect("valid settings");

        assert_eq!(settings.connection_uri(), "mongodb://localhost:27017");
        assert_eq!(settings.database_name(), "catalog_dev");
    }

    #[test]
    fn test_blank_connection_uri_is_rejected() {
        let result = StoreSettings::new("   ", "catalog_dev");
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }

    #[test]
    fn test_empty_database_name_is_rejected() {
        let result = StoreSettings::new("mongodb://localhost:27017", "");
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }

    #[test]
    fn test_from_env_fails_when_unset() {
        if env::var(ENV_MONGODB_URI).is_err() && env::var(ENV_DATABASE_NAME).is_err() {
            assert!(matches!(
                StoreSettings::from_env(),
                Err(AppError::ConfigurationError(_))
            ));
        }
    }
}
