//! Product Entity Implementation
//!
//! 상품 엔티티의 핵심 구현체입니다.
//! 카탈로그에 저장되는 상품 한 건을 표현하며, [`Entity`] trait을 구현하여
//! 제네릭 리포지토리를 통한 저장이 가능합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::entity::Entity;

/// 상품 엔티티
///
/// 카탈로그의 모든 상품을 표현하는 핵심 도메인 엔티티입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 상품명
    pub name: String,
    /// 상품 코드 (unique)
    pub sku: String,
    /// 상품 설명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 판매 가격
    pub price: f64,
    /// 재고 수량
    pub stock_quantity: i64,
    /// 상품 분류
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// 판매 활성화 여부
    pub is_active: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간 (첫 수정 전에는 없음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl Product {
    /// 새 상품 생성
    ///
    /// 판매 활성화 상태의 상품을 생성합니다. ID는 저장 시점에 할당되며,
    /// `created_at`은 리포지토리가 삽입 시점에 다시 기록합니다.
    pub fn new(name: impl Into<String>, sku: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            sku: sku.into(),
            description: None,
            price,
            stock_quantity: 0,
            category: None,
            is_active: true,
            created_at: DateTime::now(),
            updated_at: None,
        }
    }

    /// 생성 시각을 `chrono` UTC 타임스탬프로 변환
    ///
    /// BSON DateTime은 밀리초 정밀도이므로 변환 결과도 밀리초 단위입니다.
    pub fn created_at_utc(&self) -> chrono::DateTime<chrono::Utc> {
        self.created_at.to_chrono()
    }

    /// 재고가 있는 상품인지 확인
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// 판매 가능한 상품인지 확인 (활성화 + 재고 보유)
    pub fn is_sellable(&self) -> bool {
        self.is_active && self.is_in_stock()
    }
}

impl Entity for Product {
    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn created_at(&self) -> DateTime {
        self.created_at
    }

    fn set_created_at(&mut self, at: DateTime) {
        self.created_at = at;
    }

    fn updated_at(&self) -> Option<DateTime> {
        self.updated_at
    }

    fn set_updated_at(&mut self, at: DateTime) {
        self.updated_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_has_no_id_and_no_update_stamp() {
        let product = Product::new("Keyboard", "KB-001", 49.99);

        assert!(product.id.is_none());
        assert!(product.updated_at.is_none());
        assert!(product.is_active);
        assert_eq!(product.stock_quantity, 0);
    }

    #[test]
    fn test_entity_accessors_round_trip() {
        let mut product = Product::new("Mouse", "MS-001", 19.99);

        let id = ObjectId::new();
        product.set_id(id);
        assert_eq!(Entity::id(&product), Some(id));
        assert_eq!(product.id_string(), Some(id.to_hex()));

        let stamp = DateTime::now();
        product.set_updated_at(stamp);
        assert_eq!(Entity::updated_at(&product), Some(stamp));
    }

    #[test]
    fn test_serialization_omits_absent_id_and_update_stamp() {
        let product = Product::new("Webcam", "WC-001", 59.99);

        let value = serde_json::to_value(&product).expect("serializable");
        let object = value.as_object().expect("json object");

        assert!(!object.contains_key("_id"));
        assert!(!object.contains_key("updated_at"));
        assert_eq!(object["sku"], "WC-001");
    }

    #[test]
    fn test_created_at_utc_matches_bson_stamp() {
        let product = Product::new("Headset", "HS-001", 89.99);

        assert_eq!(
            product.created_at_utc().timestamp_millis(),
            product.created_at.timestamp_millis()
        );
    }

    #[test]
    fn test_sellable_requires_stock_and_active() {
        let mut product = Product::new("Monitor", "MN-001", 199.0);
        assert!(!product.is_sellable());

        product.stock_quantity = 3;
        assert!(product.is_sellable());

        product.is_active = false;
        assert!(!product.is_sellable());
    }
}
