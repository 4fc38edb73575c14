//! 도메인 엔티티 모듈
//!
//! 저장 가능한 도큐먼트 타입들과 공통 capability trait을 제공합니다.
//!
//! - [`entity::Entity`] - 리포지토리가 요구하는 필드 접근자 trait
//! - [`products`] - 상품 엔티티

pub mod entity;
pub mod products;

pub use entity::Entity;
