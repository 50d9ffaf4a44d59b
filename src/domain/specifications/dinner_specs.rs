use mongodb::bson::{doc, oid::ObjectId};
use crate::domain::entities::base::EntityStatus;
use crate::domain::entities::dinners::UserDinner;
use super::{Specification, not_deleted};

/// 디너에 연결된, 삭제되지 않은 참가 정보
pub fn participants_of_dinner(dinner_id: ObjectId) -> Specification<UserDinner> {
    Specification::new(
        doc! { "dinner_id": dinner_id },
        move |link: &UserDinner| link.dinner_id == dinner_id,
    )
    .and(not_deleted())
}

/// 사용자와 디너 사이의 활성 연결. 부분 유니크 인덱스와 같은 조건입니다.
pub fn active_link_between(user_id: ObjectId, dinner_id: ObjectId) -> Specification<UserDinner> {
    Specification::new(
        doc! {
            "user_id": user_id,
            "dinner_id": dinner_id,
            "audit.status": EntityStatus::Active.as_str(),
        },
        move |link: &UserDinner| {
            link.user_id == user_id && link.dinner_id == dinner_id && link.audit.is_active()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::dinners::PaymentStatus;

    #[test]
    fn test_participants_of_dinner() {
        let dinner_id = ObjectId::new();
        let mut link = UserDinner::new(ObjectId::new(), dinner_id, false, PaymentStatus::Pending, None);
        let spec = participants_of_dinner(dinner_id);

        assert!(spec.is_satisfied_by(&link));
        assert!(!participants_of_dinner(ObjectId::new()).is_satisfied_by(&link));

        link.remove(None).unwrap();
        assert!(!spec.is_satisfied_by(&link));
    }

    #[test]
    fn test_active_link_between() {
        let (user_id, dinner_id) = (ObjectId::new(), ObjectId::new());
        let link = UserDinner::new(user_id, dinner_id, true, PaymentStatus::Paid, None);

        assert!(active_link_between(user_id, dinner_id).is_satisfied_by(&link));
        assert!(!active_link_between(dinner_id, user_id).is_satisfied_by(&link));
        assert_eq!(
            active_link_between(user_id, dinner_id).to_filter().get_str("audit.status").unwrap(),
            "Active"
        );
    }
}
