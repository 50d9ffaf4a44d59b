use crate::domain::entities::base::Auditable;
use crate::domain::entities::dinners::{Dinner, PaymentStatus, UserDinner};
use crate::domain::entities::users::User;

pub struct UserDinnerDomainService;

impl UserDinnerDomainService {
    /// 결제 상태 전이 가능 여부. `Canceled`는 종단 상태이고 같은 상태로의 전이는 허용하지 않습니다.
    pub fn can_change_payment_status(current: PaymentStatus, next: PaymentStatus) -> bool {
        current != PaymentStatus::Canceled && current != next
    }

    /// 사용자를 디너에 등록할 수 있는지 판정합니다.
    ///
    /// `existing`은 두 엔티티 사이에 이미 저장된 연결입니다 (있다면).
    pub fn can_add_user_to_dinner(user: &User, dinner: &Dinner, existing: Option<&UserDinner>) -> bool {
        if user.is_deleted() || dinner.is_deleted() {
            return false;
        }

        !existing.is_some_and(|link| {
            link.user_id == user.id && link.dinner_id == dinner.id && link.audit.is_active()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserRole;
    use crate::domain::value_objects::{Cpf, Email, Password, PhoneNumber};

    const ALL: [PaymentStatus; 3] = [PaymentStatus::Pending, PaymentStatus::Paid, PaymentStatus::Canceled];

    fn user() -> User {
        User::new(
            "Joao Lima",
            Email::parse("joao@sni.org").unwrap(),
            Password::hash("segredo123", 4).unwrap(),
            PhoneNumber::parse("11912345678").unwrap(),
            Cpf::parse("11144477735").unwrap(),
            UserRole::User,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_canceled_never_changes() {
        for next in ALL {
            assert!(!UserDinnerDomainService::can_change_payment_status(PaymentStatus::Canceled, next));
        }
    }

    #[test]
    fn test_same_status_is_not_a_transition() {
        for status in ALL {
            assert!(!UserDinnerDomainService::can_change_payment_status(status, status));
        }
    }

    #[test]
    fn test_allowed_transitions() {
        assert!(UserDinnerDomainService::can_change_payment_status(PaymentStatus::Pending, PaymentStatus::Paid));
        assert!(UserDinnerDomainService::can_change_payment_status(PaymentStatus::Paid, PaymentStatus::Pending));
        assert!(UserDinnerDomainService::can_change_payment_status(PaymentStatus::Paid, PaymentStatus::Canceled));
    }

    #[test]
    fn test_can_add_user_to_dinner() {
        let user = user();
        let dinner = Dinner::new("Jantar", 12_000, None).unwrap();

        assert!(UserDinnerDomainService::can_add_user_to_dinner(&user, &dinner, None));

        let mut link = UserDinner::new(user.id, dinner.id, false, PaymentStatus::Pending, None);
        assert!(!UserDinnerDomainService::can_add_user_to_dinner(&user, &dinner, Some(&link)));

        link.remove(None).unwrap();
        assert!(UserDinnerDomainService::can_add_user_to_dinner(&user, &dinner, Some(&link)));
    }

    #[test]
    fn test_deleted_side_blocks_registration() {
        let user = user();
        let mut dinner = Dinner::new("Jantar", 12_000, None).unwrap();
        dinner.delete(None).unwrap();

        assert!(!UserDinnerDomainService::can_add_user_to_dinner(&user, &dinner, None));
    }
}
