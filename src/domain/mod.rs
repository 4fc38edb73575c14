//! 도메인 계층 모듈
//!
//! 비즈니스 도메인의 핵심 타입들을 정의합니다.

pub mod entities;
