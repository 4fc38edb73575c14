//! 엔티티 서비스 공통 인터페이스
//!
//! 리포지토리 하나를 감싸는 도메인 서비스의 공통 조회 연산을 정의합니다.
//! 기본 구현은 리포지토리로 그대로 위임하며, 구체 서비스는 메서드를
//! 재정의하여 도메인별 필터링을 추가할 수 있습니다.

use async_trait::async_trait;

use crate::domain::entities::entity::Entity;
use crate::errors::errors::AppResult;
use crate::repositories::mongo_repository::MongoRepository;

/// 리포지토리 위임 기반 도메인 서비스 인터페이스
///
/// 서비스는 자신의 리포지토리를 수명 동안 독점적으로 소유하며,
/// 독립적인 상태를 가지지 않습니다.
#[async_trait]
pub trait EntityService<T: Entity>: Send + Sync {
    /// 서비스가 소유한 리포지토리를 반환합니다.
    fn repository(&self) -> &MongoRepository<T>;

    /// 컬렉션의 모든 도큐먼트를 반환합니다.
    ///
    /// 기본 구현은 리포지토리의 `get_all`로 위임합니다.
    /// 구체 서비스가 재정의하여 결과를 거를 수 있습니다.
    async fn get_all(&self) -> AppResult<Vec<T>> {
        self.repository().get_all().await
    }

    /// ID로 도큐먼트 하나를 조회합니다. 없으면 `Ok(None)`입니다.
    async fn get_by_id(&self, id: &str) -> AppResult<Option<T>> {
        self.repository().find_by_id(id).await
    }
}
