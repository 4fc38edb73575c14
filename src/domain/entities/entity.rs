//! Entity Capability Trait
//!
//! 리포지토리가 저장할 수 있는 도큐먼트 타입이 갖춰야 할 필드 접근자를 정의합니다.
//! 모든 도큐먼트 타입은 ID와 생성/수정 타임스탬프를 노출해야 하며,
//! 리포지토리는 이 접근자를 통해 삽입/교체 시점에 타임스탬프를 기록합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{de::DeserializeOwned, Serialize};

/// 컬렉션에 저장 가능한 도큐먼트의 공통 인터페이스
///
/// ID는 12바이트 ObjectId로, 생성 후 변경되지 않으며 컬렉션 내에서 유일합니다.
/// `created_at`은 리포지토리가 삽입 시점에 정확히 한 번 기록하고,
/// `updated_at`은 교체가 일어날 때마다 기록됩니다 (첫 교체 전에는 `None`).
/// 두 타임스탬프 모두 호출자가 넘긴 값을 덮어씁니다.
pub trait Entity: Serialize + DeserializeOwned + Unpin + Send + Sync {
    /// 도큐먼트 ID를 반환합니다. 아직 저장된 적이 없으면 `None`입니다.
    fn id(&self) -> Option<ObjectId>;

    /// 도큐먼트 ID를 설정합니다. 리포지토리가 삽입 시점에만 호출합니다.
    fn set_id(&mut self, id: ObjectId);

    /// 생성 시각을 반환합니다.
    fn created_at(&self) -> DateTime;

    /// 생성 시각을 설정합니다. 리포지토리가 삽입 시점에 호출합니다.
    fn set_created_at(&mut self, at: DateTime);

    /// 마지막 수정 시각을 반환합니다. 한 번도 교체되지 않았으면 `None`입니다.
    fn updated_at(&self) -> Option<DateTime>;

    /// 마지막 수정 시각을 설정합니다. 리포지토리가 교체 시점에 호출합니다.
    fn set_updated_at(&mut self, at: DateTime);

    /// ID를 24자리 16진수 문자열로 변환합니다.
    fn id_string(&self) -> Option<String> {
        self.id().map(|id| id.to_hex())
    }
}
