use mongodb::bson::doc;
use crate::domain::entities::base::{Auditable, EntityStatus};
use super::Specification;

/// 소프트 삭제되지 않은 엔티티
pub fn not_deleted<T: Auditable + 'static>() -> Specification<T> {
    Specification::new(
        doc! { "audit.status": { "$ne": EntityStatus::Deleted.as_str() } },
        |entity: &T| !entity.is_deleted(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Event;

    #[test]
    fn test_not_deleted() {
        let spec = not_deleted::<Event>();
        let mut event = Event::new("Congresso", None).unwrap();

        assert!(spec.is_satisfied_by(&event));
        event.delete(None).unwrap();
        assert!(!spec.is_satisfied_by(&event));
        assert_eq!(spec.to_filter(), doc! { "audit.status": { "$ne": "Deleted" } });
    }
}
