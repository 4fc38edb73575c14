//! # 제네릭 MongoDB 리포지토리 구현
//!
//! 임의의 [`Entity`] 타입에 대한 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 타입당 하나의 컬렉션을 감싸며, 존재 확인/카운트/조회/삽입/교체/삭제/페이징의
//! 전체 CRUD 연산을 제공합니다.
//!
//! ## 특징
//!
//! - **타임스탬프 관리**: 삽입 시 `created_at`, 교체 시 `updated_at`을
//!   리포지토리가 직접 기록하며, 전달받은 도큐먼트 객체도 함께 변경됩니다.
//! - **ID 검증 우선**: 잘못된 ID 문자열은 저장소 호출 전에 실패합니다.
//! - **단일 호출 위임**: 모든 연산은 드라이버 호출 하나로 위임되며,
//!   내부 재시도/타임아웃/락을 두지 않습니다. 동일 ID에 대한 동시 교체는
//!   저장소 계층에서 마지막 쓰기가 이깁니다.
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `Result<T, AppError>`를 반환합니다:
//!
//! - **DatabaseError**: 드라이버/전송 오류 (재시도 없이 전파)
//! - **InvalidId**: 24자리 16진수가 아닌 ID 문자열
//!
//! 단건 조회의 "찾을 수 없음"은 `Ok(None)`입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::repositories::mongo_repository::MongoRepository;
//! use crate::repositories::filter::Filter;
//! use crate::domain::entities::products::product::Product;
//!
//! async fn product_operations(db: &Database) -> Result<(), AppError> {
//!     let repo: MongoRepository<Product> = MongoRepository::new(db);
//!
//!     let mut product = Product::new("Keyboard", "KB-001", 49.99);
//!     repo.insert_one(&mut product, true).await?;
//!
//!     let cheap = repo.filter_by(&Filter::lt("price", 10.0)).await?;
//!     let page = repo.get_all_paged(20, 1, false).await?;
//!
//!     Ok(())
//! }
//! ```

use futures_util::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::Collection;
use serde::de::DeserializeOwned;

use crate::db::Database;
use crate::domain::entities::entity::Entity;
use crate::errors::errors::{AppError, AppResult};

use super::collections::collection_name;
use super::filter::{Filter, Projection};

/// ID 문자열을 ObjectId로 변환합니다.
///
/// 저장소 호출에 앞서 수행되는 검증으로, 24자리 16진수 형식이 아니면
/// `AppError::InvalidId`를 반환합니다.
pub(crate) fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}

/// 1-based 페이지 번호를 skip 오프셋으로 변환합니다.
///
/// 페이지 번호 0은 1페이지로 취급합니다.
pub(crate) fn page_skip(page_size: u64, page_number: u64) -> u64 {
    page_number.saturating_sub(1) * page_size
}

/// 삽입 직전의 도큐먼트를 준비합니다.
///
/// `created_at`을 현재 시각으로 기록하고 (호출자가 넘긴 값은 덮어씀),
/// `new_id`이거나 ID가 없으면 새 ObjectId를 할당합니다.
pub(crate) fn prepare_for_insert<T: Entity>(document: &mut T, new_id: bool) {
    document.set_created_at(DateTime::now());

    if new_id || document.id().is_none() {
        document.set_id(ObjectId::new());
    }
}

/// 제네릭 MongoDB 데이터 액세스 리포지토리
///
/// 타입 `T`의 도큐먼트가 저장되는 컬렉션 하나를 감쌉니다.
/// 컬렉션 이름은 생성 시점에 [컬렉션 레지스트리](super::collections)에서
/// 한 번 결정되며 이후 변경되지 않습니다.
pub struct MongoRepository<T: Entity> {
    /// 바인딩된 MongoDB 컬렉션
    collection: Collection<T>,
}

impl<T: Entity> MongoRepository<T> {
    /// 타입 `T`에 대한 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        let name = collection_name::<T>();

        Self {
            collection: db.get_database().collection::<T>(name),
        }
    }

    /// 바인딩된 컬렉션 이름을 반환합니다.
    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// 조건과 일치하는 도큐먼트가 하나라도 있는지 확인합니다.
    ///
    /// 전체 스캔 없이 첫 번째 일치에서 멈춥니다.
    pub async fn contains(&self, filter: &Filter) -> AppResult<bool> {
        let count = self
            .collection
            .count_documents(filter.to_document())
            .limit(1)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    /// 컬렉션의 전체 도큐먼트 수 추정치를 반환합니다.
    ///
    /// 컬렉션 메타데이터 기반이므로 최근 쓰기가 반영되지 않은
    /// 근사값일 수 있습니다. 정확한 수가 필요하면 `filter_by` 결과를 세십시오.
    pub async fn count(&self) -> AppResult<u64> {
        self.collection
            .estimated_document_count()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 조건과 일치하는 모든 도큐먼트를 반환합니다. 순서는 보장되지 않습니다.
    pub async fn filter_by(&self, filter: &Filter) -> AppResult<Vec<T>> {
        let cursor = self
            .collection
            .find(filter.to_document())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 조건과 일치하는 도큐먼트를 프로젝션된 형태 `P`로 축소하여 반환합니다.
    ///
    /// 축소는 서버 측에서 수행되며, `P`의 필드 구성이 프로젝션과 일치해야
    /// 역직렬화에 성공합니다. ID 필드가 없는 타입이라면
    /// [`Projection::exclude_id`](super::filter::Projection::exclude_id)를 사용하십시오.
    pub async fn filter_by_projected<P>(
        &self,
        filter: &Filter,
        projection: &Projection,
    ) -> AppResult<Vec<P>>
    where
        P: DeserializeOwned + Unpin + Send + Sync,
    {
        let cursor = self
            .collection
            .clone_with_type::<P>()
            .find(filter.to_document())
            .projection(projection.to_document())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 조건과 일치하는 첫 번째 도큐먼트를 반환합니다.
    pub async fn find_one(&self, filter: &Filter) -> AppResult<Option<T>> {
        self.collection
            .find_one(filter.to_document())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 도큐먼트를 조회합니다.
    ///
    /// # Errors
    ///
    /// ID 문자열이 24자리 16진수 형식이 아니면 저장소 호출 없이
    /// `AppError::InvalidId`를 반환합니다.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 도큐먼트를 삽입합니다.
    ///
    /// `new_id`가 false이고 도큐먼트에 이미 ID가 있으면 삽입 대신
    /// [`replace_one`](Self::replace_one)으로 위임합니다. 그 외에는
    /// `created_at`을 기록하고, `new_id`이거나 ID가 없으면 새 ID를 할당한 뒤
    /// 삽입합니다. 타임스탬프와 ID는 전달받은 도큐먼트 객체에도 기록됩니다.
    pub async fn insert_one(&self, document: &mut T, new_id: bool) -> AppResult<()> {
        if !new_id && document.id().is_some() {
            debug!(
                "insert_one: existing id on {} document, replacing instead",
                self.collection.name()
            );
            return self.replace_one(document).await;
        }

        prepare_for_insert(document, new_id);

        self.collection
            .insert_one(&*document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 여러 도큐먼트를 한 번의 배치로 삽입합니다.
    ///
    /// 각 도큐먼트에 `created_at`을 기록하고 ID가 없으면 할당합니다.
    /// 배치는 원자적이지 않습니다 — 중간 실패 시 이미 저장된 도큐먼트는
    /// 롤백되지 않습니다. 빈 배치는 아무 일도 하지 않습니다.
    pub async fn insert_many(&self, documents: &mut [T]) -> AppResult<()> {
        if documents.is_empty() {
            return Ok(());
        }

        for document in documents.iter_mut() {
            prepare_for_insert(document, false);
        }

        self.collection
            .insert_many(documents.iter())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// ID가 일치하는 도큐먼트를 전체 교체합니다.
    ///
    /// 부분 필드 패치가 아닌 전체 덮어쓰기이며, `updated_at`을 현재 시각으로
    /// 기록합니다 (전달받은 객체에도 기록). 일치하는 도큐먼트가 없으면
    /// 조용히 아무 일도 하지 않습니다.
    ///
    /// # Errors
    ///
    /// 도큐먼트에 ID가 없으면 `AppError::InvalidId`를 반환합니다.
    pub async fn replace_one(&self, document: &mut T) -> AppResult<()> {
        let id = document
            .id()
            .ok_or_else(|| AppError::InvalidId("document has no id".to_string()))?;

        document.set_updated_at(DateTime::now());

        self.collection
            .replace_one(doc! { "_id": id }, &*document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 조건과 일치하는 도큐먼트를 최대 하나 삭제합니다.
    ///
    /// 여러 건이 일치하면 어느 것이 삭제될지는 정의되지 않습니다.
    /// 일치하는 도큐먼트가 없으면 조용히 완료됩니다.
    pub async fn delete_one(&self, filter: &Filter) -> AppResult<()> {
        self.collection
            .delete_one(filter.to_document())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// ID가 일치하는 도큐먼트를 삭제합니다.
    ///
    /// 해당 ID의 도큐먼트가 없으면 조용히 완료됩니다.
    ///
    /// # Errors
    ///
    /// ID 문자열이 잘못된 형식이면 저장소 호출 없이 `AppError::InvalidId`를 반환합니다.
    pub async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let object_id = parse_object_id(id)?;

        self.collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 조건과 일치하는 모든 도큐먼트를 삭제합니다.
    pub async fn delete_many(&self, filter: &Filter) -> AppResult<()> {
        self.collection
            .delete_many(filter.to_document())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 컬렉션의 모든 도큐먼트를 반환합니다. 순서는 보장되지 않습니다.
    pub async fn get_all(&self) -> AppResult<Vec<T>> {
        self.filter_by(&Filter::empty()).await
    }

    /// 생성 시각 내림차순으로 정렬된 페이지를 반환합니다.
    ///
    /// `page_number`는 1부터 시작하며, 0은 1페이지로 취급합니다.
    /// 동일 생성 시각은 `_id` 내림차순으로 순서가 고정됩니다.
    /// `check_delete`는 받기만 하고 사용하지 않습니다 — 소프트 삭제 모델이
    /// 도입되면 삭제 표시된 도큐먼트를 거르는 용도입니다.
    pub async fn get_all_paged(
        &self,
        page_size: u64,
        page_number: u64,
        _check_delete: bool,
    ) -> AppResult<Vec<T>> {
        if page_size == 0 {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection
            .find(Document::new())
            .sort(doc! { "created_at": -1, "_id": -1 })
            .skip(page_skip(page_size, page_number))
            .limit(page_size as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::products::product::Product;

    #[test]
    fn test_parse_object_id_accepts_24_hex_chars() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_object_id_rejects_malformed_strings() {
        for bad in ["", "zzz", "507f1f77bcf86cd79943901", "507f1f77bcf86cd79943901g"] {
            assert!(matches!(parse_object_id(bad), Err(AppError::InvalidId(_))));
        }
    }

    #[test]
    fn test_page_skip_is_one_based() {
        assert_eq!(page_skip(2, 1), 0);
        assert_eq!(page_skip(2, 2), 2);
        assert_eq!(page_skip(10, 4), 30);
    }

    #[test]
    fn test_page_zero_is_treated_as_first_page() {
        assert_eq!(page_skip(5, 0), 0);
    }

    #[test]
    fn test_prepare_for_insert_assigns_id_and_created_at() {
        let before = DateTime::now();
        let mut product = Product::new("Keyboard", "KB-001", 49.99);

        prepare_for_insert(&mut product, true);

        assert!(product.id.is_some());
        assert!(product.created_at >= before);
        assert!(product.updated_at.is_none());
    }

    #[test]
    fn test_prepare_for_insert_overwrites_caller_created_at() {
        let mut product = Product::new("Mouse", "MS-001", 19.99);
        let stale = DateTime::from_millis(0);
        product.created_at = stale;

        prepare_for_insert(&mut product, false);

        assert!(product.created_at > stale);
    }

    #[test]
    fn test_prepare_for_insert_keeps_existing_id_without_new_id() {
        let mut product = Product::new("Monitor", "MN-001", 199.0);
        let id = ObjectId::new();
        product.id = Some(id);

        prepare_for_insert(&mut product, false);
        assert_eq!(product.id, Some(id));

        prepare_for_insert(&mut product, true);
        assert_ne!(product.id, Some(id));
    }
}
