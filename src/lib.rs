//! 카탈로그 데이터 액세스 백엔드
//!
//! MongoDB 위에 구축된 제네릭 데이터 액세스 계층입니다.
//! 임의의 도큐먼트 타입에 대한 CRUD/필터링/페이징/카운트 리포지토리와
//! 이를 위임하는 얇은 도메인 서비스를 제공합니다.
//!
//! # Features
//!
//! - **제네릭 리포지토리**: 타입당 컬렉션 하나, 전체 CRUD + 페이징
//! - **비동기/동기 이중 제공**: 동일한 의미의 `blocking` 변형
//! - **타임스탬프 관리**: 삽입 시 `created_at`, 교체 시 `updated_at` 자동 기록
//! - **필터 빌더**: 표현식 없이 조합 가능한 조건식 값 타입
//! - **MongoDB**: 쿼리 실행/인덱싱/복제는 전부 저장소 엔진의 몫
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Services     │ ← 도메인 위임 계층
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 제네릭 CRUD + 필터/페이징
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use catalog_data_backend::config::StoreSettings;
//! use catalog_data_backend::db::Database;
//! use catalog_data_backend::domain::entities::products::Product;
//! use catalog_data_backend::repositories::{Filter, MongoRepository};
//!
//! let settings = StoreSettings::from_env()?;
//! let db = Database::connect(&settings).await?;
//!
//! let repo: MongoRepository<Product> = MongoRepository::new(&db);
//! let mut product = Product::new("Keyboard", "KB-001", 49.99);
//! repo.insert_one(&mut product, true).await?;
//!
//! let active = repo.filter_by(&Filter::eq("is_active", true)).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
