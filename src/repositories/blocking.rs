//! 블로킹(동기) 제네릭 MongoDB 리포지토리
//!
//! 비동기 런타임 없이 동작하는 호출자를 위한 동기 리포지토리입니다.
//! [`MongoRepository`](super::mongo_repository::MongoRepository)의 모든 연산을
//! 동일한 의미로 제공하며, 드라이버의 `sync` API 위에서 호출 스레드를 블로킹합니다.
//! ID 검증, 타임스탬프 기록, 에러 처리 규칙은 비동기 변형과 완전히 같습니다.

use log::debug;
use mongodb::bson::{doc, DateTime, Document};
use mongodb::sync::Collection;
use serde::de::DeserializeOwned;

use crate::db::blocking::Database;
use crate::domain::entities::entity::Entity;
use crate::errors::errors::{AppError, AppResult};

use super::collections::collection_name;
use super::filter::{Filter, Projection};
use super::mongo_repository::{page_skip, parse_object_id, prepare_for_insert};

/// 동기 제네릭 MongoDB 데이터 액세스 리포지토리
pub struct MongoRepository<T: Entity> {
    collection: Collection<T>,
}

impl<T: Entity> MongoRepository<T> {
    /// 타입 `T`에 대한 동기 리포지토리를 생성합니다.
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
    pub fn contains(&self, filter: &Filter) -> AppResult<bool> {
        let count = self
            .collection
            .count_documents(filter.to_document())
            .limit(1)
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    /// 컬렉션의 전체 도큐먼트 수 추정치를 반환합니다.
    pub fn count(&self) -> AppResult<u64> {
        self.collection
            .estimated_document_count()
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 조건과 일치하는 모든 도큐먼트를 반환합니다. 순서는 보장되지 않습니다.
    pub fn filter_by(&self, filter: &Filter) -> AppResult<Vec<T>> {
        let cursor = self
            .collection
            .find(filter.to_document())
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .collect::<mongodb::error::Result<Vec<T>>>()
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 조건과 일치하는 도큐먼트를 프로젝션된 형태 `P`로 축소하여 반환합니다.
    pub fn filter_by_projected<P>(
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
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .collect::<mongodb::error::Result<Vec<P>>>()
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 조건과 일치하는 첫 번째 도큐먼트를 반환합니다.
    pub fn find_one(&self, filter: &Filter) -> AppResult<Option<T>> {
        self.collection
            .find_one(filter.to_document())
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 도큐먼트를 조회합니다.
    ///
    /// # Errors
    ///
    /// ID 문자열이 잘못된 형식이면 저장소 호출 없이 `AppError::InvalidId`를 반환합니다.
    pub fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 도큐먼트를 삽입합니다. 의미는 비동기 변형의
    /// [`insert_one`](super::mongo_repository::MongoRepository::insert_one)과 같습니다.
    pub fn insert_one(&self, document: &mut T, new_id: bool) -> AppResult<()> {
        if !new_id && document.id().is_some() {
            debug!(
                "insert_one: existing id on {} document, replacing instead",
                self.collection.name()
            );
            return self.replace_one(document);
        }

        prepare_for_insert(document, new_id);

        self.collection
            .insert_one(&*document)
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 여러 도큐먼트를 한 번의 배치로 삽입합니다. 배치는 원자적이지 않습니다.
    pub fn insert_many(&self, documents: &mut [T]) -> AppResult<()> {
        if documents.is_empty() {
            return Ok(());
        }

        for document in documents.iter_mut() {
            prepare_for_insert(document, false);
        }

        self.collection
            .insert_many(documents.iter())
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// ID가 일치하는 도큐먼트를 전체 교체합니다.
    /// 일치하는 도큐먼트가 없으면 조용히 아무 일도 하지 않습니다.
    pub fn replace_one(&self, document: &mut T) -> AppResult<()> {
        let id = document
            .id()
            .ok_or_else(|| AppError::InvalidId("document has no id".to_string()))?;

        document.set_updated_at(DateTime::now());

        self.collection
            .replace_one(doc! { "_id": id }, &*document)
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 조건과 일치하는 도큐먼트를 최대 하나 삭제합니다.
    pub fn delete_one(&self, filter: &Filter) -> AppResult<()> {
        self.collection
            .delete_one(filter.to_document())
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// ID가 일치하는 도큐먼트를 삭제합니다. 없으면 조용히 완료됩니다.
    pub fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let object_id = parse_object_id(id)?;

        self.collection
            .delete_one(doc! { "_id": object_id })
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 조건과 일치하는 모든 도큐먼트를 삭제합니다.
    pub fn delete_many(&self, filter: &Filter) -> AppResult<()> {
        self.collection
            .delete_many(filter.to_document())
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 컬렉션의 모든 도큐먼트를 반환합니다. 순서는 보장되지 않습니다.
    pub fn get_all(&self) -> AppResult<Vec<T>> {
        self.filter_by(&Filter::empty())
    }

    /// 생성 시각 내림차순으로 정렬된 페이지를 반환합니다.
    /// `check_delete`는 받기만 하고 사용하지 않습니다.
    pub fn get_all_paged(
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
            .run()
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .collect::<mongodb::error::Result<Vec<T>>>()
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
