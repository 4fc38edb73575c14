//! 블로킹(동기) MongoDB 연결 래퍼
//!
//! 비동기 런타임 없이 동작해야 하는 호출자를 위한 동기 연결 관리자입니다.
//! [`super::Database`]와 동일한 의미를 가지며, 드라이버의 `sync` API 위에서 동작합니다.

use log::info;
use mongodb::options::ClientOptions;
use mongodb::sync::Client;

use crate::config::StoreSettings;
use crate::errors::errors::{AppError, AppResult};

/// 동기 MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 검증된 설정으로 새 동기 MongoDB 연결을 생성합니다.
    ///
    /// 비동기 [`super::Database::connect`]와 동일하게 연결 URI 파싱과
    /// `ping` 검증을 수행하며, 호출 스레드를 블로킹합니다.
    ///
    /// # Errors
    ///
    /// 연결 URI 파싱 실패 또는 연결 확인 실패 시 `AppError::DatabaseError`를 반환합니다.
    pub fn connect(settings: &StoreSettings) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(settings.connection_uri())
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client_options.app_name = Some(super::APP_NAME.to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(settings.database_name())
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공 (blocking): {}", settings.database_name());

        Ok(Self {
            client,
            database_name: settings.database_name().to_string(),
        })
    }

    /// 동기 MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::sync::Database {
        self.client.database(&self.database_name)
    }

    /// 동기 MongoDB 클라이언트 인스턴스를 반환합니다.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
