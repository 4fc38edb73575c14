//! 컬렉션 이름 레지스트리
//!
//! 도큐먼트 타입과 MongoDB 컬렉션 이름의 정적 매핑 테이블입니다.
//! 매핑은 최초 접근 시 단 한 번 구성되며, 테이블에 등록되지 않은 타입은
//! 타입 이름 자체를 컬렉션 이름으로 사용합니다.
//! 리포지토리 생성 시점에 조회된 이름은 이후 변경되지 않습니다.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// 타입 이름 → 컬렉션 이름 정적 등록 테이블
static COLLECTION_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("Product", "products");
    table
});

/// 타입 `T`가 저장될 컬렉션 이름을 반환합니다.
///
/// 등록 테이블에 항목이 있으면 그 이름을, 없으면 타입의 짧은 이름을 반환합니다.
pub fn collection_name<T>() -> &'static str {
    let type_name = short_type_name::<T>();
    COLLECTION_NAMES.get(type_name).copied().unwrap_or(type_name)
}

/// 모듈 경로를 제외한 타입 이름을 반환합니다.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::products::product::Product;

    struct AuditEntry;

    #[test]
    fn test_registered_type_uses_table_entry() {
        assert_eq!(collection_name::<Product>(), "products");
    }

    #[test]
    fn test_unregistered_type_falls_back_to_type_name() {
        assert_eq!(collection_name::<AuditEntry>(), "AuditEntry");
    }
}
