//! # Specifications
//!
//! 하나의 비즈니스 규칙을 두 가지 형태로 함께 들고 다니는 조합 가능한 조건입니다.
//!
//! - 메모리 판정: 이미 로드한 엔티티에 대해 `is_satisfied_by`
//! - 쿼리 푸시다운: 같은 조건의 MongoDB 필터 문서 `to_filter`
//!
//! ```rust,ignore
//! let spec = not_deleted::<User>()
//!     .and(user_by_name("maria"))
//!     .and(user_by_email("@sni.org"));
//!
//! let users = user_repo.find_by_spec(&spec, QueryOptions::sorted_by("name")).await?;
//! ```

pub mod common;
pub mod dinner_specs;
pub mod event_specs;
pub mod user_specs;

pub use common::not_deleted;
pub use dinner_specs::{active_link_between, participants_of_dinner};
pub use event_specs::schedules_of_event;
pub use user_specs::{active_users, user_by_cpf, user_by_email, user_by_name};

use std::fmt;
use std::sync::Arc;
use mongodb::bson::{Document, doc};

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

pub struct Specification<T> {
    predicate: Predicate<T>,
    filter: Document,
}

impl<T> Clone for Specification<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            filter: self.filter.clone(),
        }
    }
}

impl<T> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification").field("filter", &self.filter).finish()
    }
}

impl<T: 'static> Specification<T> {
    /// 필터 문서와 그에 대응하는 판정 함수로 명세를 만듭니다.
    /// 두 표현이 같은 의미를 갖도록 유지하는 것은 호출하는 쪽의 책임입니다.
    pub fn new<F>(filter: Document, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            filter,
        }
    }

    /// 모든 엔티티를 만족하는 명세 (`{}`)
    pub fn all() -> Self {
        Self::new(Document::new(), |_| true)
    }

    pub fn is_satisfied_by(&self, entity: &T) -> bool {
        (self.predicate)(entity)
    }

    pub fn to_filter(&self) -> Document {
        self.filter.clone()
    }

    pub fn and(self, other: Specification<T>) -> Self {
        let filter = match (self.filter.is_empty(), other.filter.is_empty()) {
            (true, _) => other.filter.clone(),
            (_, true) => self.filter.clone(),
            _ => doc! { "$and": [self.filter.clone(), other.filter.clone()] },
        };
        let (left, right) = (self.predicate, other.predicate);

        Self {
            predicate: Arc::new(move |entity| left(entity) && right(entity)),
            filter,
        }
    }

    pub fn or(self, other: Specification<T>) -> Self {
        let filter = if self.filter.is_empty() || other.filter.is_empty() {
            Document::new()
        } else {
            doc! { "$or": [self.filter.clone(), other.filter.clone()] }
        };
        let (left, right) = (self.predicate, other.predicate);

        Self {
            predicate: Arc::new(move |entity| left(entity) || right(entity)),
            filter,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        let filter = doc! { "$nor": [self.filter.clone()] };
        let inner = self.predicate;

        Self {
            predicate: Arc::new(move |entity| !inner(entity)),
            filter,
        }
    }
}

/// 대소문자를 무시하는 부분 일치 정규식 조건. 정규식 메타문자는 이스케이프합니다.
pub(crate) fn contains_ignore_case(term: &str) -> Document {
    doc! { "$regex": regex::escape(term), "$options": "i" }
}
