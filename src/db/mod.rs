//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 설정 검증, 연결 상태 확인, 데이터베이스 핸들 제공 기능을 담당합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::StoreSettings;
//! use crate::db::Database;
//!
//! let settings = StoreSettings::from_env()?;
//! let database = Database::connect(&settings).await?;
//! ```
//!
//! 블로킹 환경에서는 [`blocking::Database`]를 사용합니다.

pub mod blocking;

use log::info;
use mongodb::{options::ClientOptions, Client};

use crate::config::StoreSettings;
use crate::errors::errors::{AppError, AppResult};

/// 드라이버 모니터링에 노출되는 애플리케이션 이름
pub(crate) const APP_NAME: &str = "catalog_data";

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 연결을 관리하며,
/// 리포지토리 계층에서 데이터베이스 작업을 위한 기본 인터페이스를 제공합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 검증된 설정으로 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 연결 URI를 파싱해 클라이언트를 초기화하고, `ping` 명령으로
    /// 연결 상태를 검증한 후 Database 인스턴스를 반환합니다.
    /// 설정 검증 자체는 [`StoreSettings`] 생성 시점에 이미 끝나 있습니다.
    ///
    /// # Errors
    ///
    /// 연결 URI 파싱 실패 또는 연결 확인 실패 시 `AppError::DatabaseError`를 반환합니다.
    pub async fn connect(settings: &StoreSettings) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(settings.connection_uri())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 모니터링 및 로깅에 유용
        client_options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 연결 테스트
        client
            .database(settings.database_name())
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", settings.database_name());

        Ok(Self {
            client,
            database_name: settings.database_name().to_string(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// 리포지토리에서 컬렉션에 접근할 때 사용됩니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// MongoDB 클라이언트 인스턴스를 반환합니다.
    ///
    /// 세션 관리 등 클라이언트 레벨의 작업이 필요한 경우에 사용됩니다.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
