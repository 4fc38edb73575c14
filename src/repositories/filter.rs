//! 쿼리 필터 및 프로젝션 빌더
//!
//! 리포지토리 연산에 전달되는 조건식을 표현하는 조합 가능한 값 타입입니다.
//! 필드/연산자/값의 작은 트리로 구성되며, 실행 직전에 MongoDB 쿼리 도큐먼트로
//! 변환됩니다. 저장소 백엔드는 변환된 도큐먼트만을 해석합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::repositories::filter::{Filter, Projection};
//!
//! let filter = Filter::eq("category", "peripherals")
//!     .and(Filter::gt("price", 10.0));
//!
//! let projection = Projection::new().include("name").include("price");
//! ```

use mongodb::bson::{doc, Bson, Document};

/// 비교 연산자
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// 같음
    Eq,
    /// 같지 않음
    Ne,
    /// 초과
    Gt,
    /// 이상
    Gte,
    /// 미만
    Lt,
    /// 이하
    Lte,
    /// 목록 포함
    In,
}

impl FilterOp {
    /// MongoDB 쿼리 연산자 표기를 반환합니다.
    fn as_operator(&self) -> &'static str {
        match self {
            FilterOp::Eq => "$eq",
            FilterOp::Ne => "$ne",
            FilterOp::Gt => "$gt",
            FilterOp::Gte => "$gte",
            FilterOp::Lt => "$lt",
            FilterOp::Lte => "$lte",
            FilterOp::In => "$in",
        }
    }
}

/// 조합 가능한 쿼리 조건식
///
/// 단일 비교 조건 또는 `and`/`or`로 묶인 조건 트리를 표현합니다.
/// [`Filter::empty`]는 모든 도큐먼트와 일치합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// 모든 도큐먼트와 일치하는 빈 조건
    Empty,
    /// 필드/연산자/값 단일 비교 조건
    Compare {
        field: String,
        op: FilterOp,
        value: Bson,
    },
    /// 모든 하위 조건과 일치
    And(Vec<Filter>),
    /// 하나 이상의 하위 조건과 일치
    Or(Vec<Filter>),
}

impl Filter {
    /// 모든 도큐먼트와 일치하는 빈 조건을 생성합니다.
    pub fn empty() -> Self {
        Filter::Empty
    }

    /// `field == value` 조건을 생성합니다.
    pub fn eq(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::compare(field, FilterOp::Eq, value)
    }

    /// `field != value` 조건을 생성합니다.
    pub fn ne(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::compare(field, FilterOp::Ne, value)
    }

    /// `field > value` 조건을 생성합니다.
    pub fn gt(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::compare(field, FilterOp::Gt, value)
    }

    /// `field >= value` 조건을 생성합니다.
    pub fn gte(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::compare(field, FilterOp::Gte, value)
    }

    /// `field < value` 조건을 생성합니다.
    pub fn lt(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::compare(field, FilterOp::Lt, value)
    }

    /// `field <= value` 조건을 생성합니다.
    pub fn lte(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::compare(field, FilterOp::Lte, value)
    }

    /// `field ∈ values` 조건을 생성합니다.
    pub fn one_of<V: Into<Bson>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let array: Vec<Bson> = values.into_iter().map(Into::into).collect();
        Self::compare(field, FilterOp::In, Bson::Array(array))
    }

    fn compare(field: impl Into<String>, op: FilterOp, value: impl Into<Bson>) -> Self {
        Filter::Compare {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// 두 조건을 AND로 결합합니다. 빈 조건은 결합에서 흡수됩니다.
    pub fn and(self, other: Filter) -> Self {
        match (self, other) {
            (Filter::Empty, other) => other,
            (this, Filter::Empty) => this,
            (Filter::And(mut branches), other) => {
                branches.push(other);
                Filter::And(branches)
            }
            (this, other) => Filter::And(vec![this, other]),
        }
    }

    /// 두 조건을 OR로 결합합니다. 빈 조건은 결합에서 흡수됩니다.
    pub fn or(self, other: Filter) -> Self {
        match (self, other) {
            (Filter::Empty, other) => other,
            (this, Filter::Empty) => this,
            (Filter::Or(mut branches), other) => {
                branches.push(other);
                Filter::Or(branches)
            }
            (this, other) => Filter::Or(vec![this, other]),
        }
    }

    /// MongoDB 쿼리 도큐먼트로 변환합니다.
    pub fn to_document(&self) -> Document {
        match self {
            Filter::Empty => Document::new(),
            Filter::Compare { field, op, value } => match op {
                FilterOp::Eq => doc! { field.as_str(): value.clone() },
                _ => doc! { field.as_str(): { op.as_operator(): value.clone() } },
            },
            Filter::And(branches) => {
                let docs: Vec<Document> = branches.iter().map(Filter::to_document).collect();
                doc! { "$and": docs }
            }
            Filter::Or(branches) => {
                let docs: Vec<Document> = branches.iter().map(Filter::to_document).collect();
                doc! { "$or": docs }
            }
        }
    }
}

/// 프로젝션 빌더
///
/// 전송 전에 도큐먼트를 부분 형태로 축소하는 서버 측 변환을 기술합니다.
/// 포함/제외 필드 집합을 쌓아 MongoDB 프로젝션 도큐먼트로 변환됩니다.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    fields: Document,
}

impl Projection {
    /// 빈 프로젝션을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드를 결과에 포함합니다.
    pub fn include(mut self, field: impl Into<String>) -> Self {
        self.fields.insert(field.into(), 1);
        self
    }

    /// 필드를 결과에서 제외합니다.
    pub fn exclude(mut self, field: impl Into<String>) -> Self {
        self.fields.insert(field.into(), 0);
        self
    }

    /// `_id` 필드를 결과에서 제외합니다.
    ///
    /// MongoDB는 `_id`를 기본 포함하므로, 프로젝션 타입에 ID 필드가 없을 때
    /// 명시적으로 제외해야 합니다.
    pub fn exclude_id(self) -> Self {
        self.exclude("_id")
    }

    /// MongoDB 프로젝션 도큐먼트로 변환합니다.
    pub fn to_document(&self) -> Document {
        self.fields.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_renders_plain_equality() {
        let filter = Filter::eq("sku", "KB-001");
        assert_eq!(filter.to_document(), doc! { "sku": "KB-001" });
    }

    #[test]
    fn test_comparison_operators_render_operator_documents() {
        let filter = Filter::gt("price", 10.0);
        assert_eq!(filter.to_document(), doc! { "price": { "$gt": 10.0 } });

        let filter = Filter::lte("stock_quantity", 5);
        assert_eq!(
            filter.to_document(),
            doc! { "stock_quantity": { "$lte": 5 } }
        );
    }

    #[test]
    fn test_one_of_renders_in_operator() {
        let filter = Filter::one_of("category", ["a", "b"]);
        assert_eq!(
            filter.to_document(),
            doc! { "category": { "$in": ["a", "b"] } }
        );
    }

    #[test]
    fn test_and_composition_flattens() {
        let filter = Filter::eq("is_active", true)
            .and(Filter::gt("price", 1.0))
            .and(Filter::lt("price", 100.0));

        assert_eq!(
            filter.to_document(),
            doc! { "$and": [
                { "is_active": true },
                { "price": { "$gt": 1.0 } },
                { "price": { "$lt": 100.0 } },
            ] }
        );
    }

    #[test]
    fn test_empty_is_absorbed_in_composition() {
        let filter = Filter::empty().and(Filter::eq("name", "Keyboard"));
        assert_eq!(filter.to_document(), doc! { "name": "Keyboard" });

        let filter = Filter::eq("name", "Keyboard").or(Filter::empty());
        assert_eq!(filter.to_document(), doc! { "name": "Keyboard" });
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert_eq!(Filter::empty().to_document(), Document::new());
    }

    #[test]
    fn test_projection_builds_inclusion_document() {
        let projection = Projection::new()
            .include("name")
            .include("price")
            .exclude_id();

        assert_eq!(
            projection.to_document(),
            doc! { "name": 1, "price": 1, "_id": 0 }
        );
    }
}
