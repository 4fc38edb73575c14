//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 임의의 [`Entity`](crate::domain::entities::entity::Entity) 타입에 대한
//! 제네릭 CRUD 리포지토리를 제공합니다. MongoDB를 주 저장소로 사용합니다.
//!
//! # Features
//!
//! - 타입당 하나의 컬렉션에 바인딩되는 제네릭 리포지토리
//! - 조합 가능한 필터/프로젝션 빌더
//! - 비동기([`mongo_repository`]) 및 동기([`blocking`]) 변형
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::mongo_repository::MongoRepository;
//! use crate::domain::entities::products::product::Product;
//!
//! let repo: MongoRepository<Product> = MongoRepository::new(&db);
//! let all = repo.get_all().await?;
//! ```

pub mod blocking;
pub mod collections;
pub mod filter;
pub mod mongo_repository;

pub use filter::{Filter, FilterOp, Projection};
pub use mongo_repository::MongoRepository;
