//! # 상품 조회 서비스 구현
//!
//! 상품 도메인의 데이터 조회 창구입니다. 현재는 리포지토리로의 순수 위임이며,
//! 상품 도메인 고유의 비즈니스 규칙이 생기면 이 서비스에 쌓입니다.

use crate::db::Database;
use crate::domain::entities::products::product::Product;
use crate::repositories::mongo_repository::MongoRepository;
use crate::services::entity_service::EntityService;

/// 상품 도메인 서비스
///
/// [`MongoRepository<Product>`] 하나를 소유하고
/// [`EntityService`]의 기본 조회 연산을 그대로 노출합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::services::products::product_service::ProductService;
/// use crate::services::entity_service::EntityService;
///
/// let service = ProductService::new(&db);
/// let products = service.get_all().await?;
/// let one = service.get_by_id("507f1f77bcf86cd799439011").await?;
/// ```
pub struct ProductService {
    /// 상품 컬렉션에 바인딩된 리포지토리
    repository: MongoRepository<Product>,
}

impl ProductService {
    /// 새 상품 서비스를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            repository: MongoRepository::new(db),
        }
    }
}

#[async_trait::async_trait]
impl EntityService<Product> for ProductService {
    fn repository(&self) -> &MongoRepository<Product> {
        &self.repository
    }
}
