//! # Configuration Module
//!
//! 데이터 액세스 계층의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`store_config`] - MongoDB 연결 관련 설정
//!
//! ## 설계 원칙
//!
//! - 설정값 검증은 생성 시점에 단 한 번 수행됩니다.
//! - 누락/공백 설정은 저장소 연결 시도 전에 즉시 실패합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::StoreSettings;
//!
//! let settings = StoreSettings::new("mongodb://localhost:27017", "catalog_dev")?;
//! // 또는 환경 변수에서
//! let settings = StoreSettings::from_env()?;
//! ```

pub mod store_config;

pub use store_config::StoreSettings;
