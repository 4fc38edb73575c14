//! 비즈니스 로직 계층을 담당하는 서비스 모듈
//!
//! 도메인별 서비스는 리포지토리 하나를 소유하고 조회 연산을 위임합니다.
//!
//! - [`entity_service`] - 공통 위임 인터페이스
//! - [`products`] - 상품 도메인 서비스

pub mod entity_service;
pub mod products;

pub use entity_service::EntityService;
