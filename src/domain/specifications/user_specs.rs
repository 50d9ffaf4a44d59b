use mongodb::bson::doc;
use crate::domain::entities::base::EntityStatus;
use crate::domain::entities::users::User;
use super::{Specification, contains_ignore_case};

/// 상태가 Active인 사용자
pub fn active_users() -> Specification<User> {
    Specification::new(
        doc! { "audit.status": EntityStatus::Active.as_str() },
        |user: &User| user.audit.is_active(),
    )
}

/// 이름 부분 일치. 빈 검색어는 모든 사용자를 만족합니다.
pub fn user_by_name(term: &str) -> Specification<User> {
    let term = term.trim().to_string();
    if term.is_empty() {
        return Specification::all();
    }

    let needle = term.to_lowercase();
    Specification::new(
        doc! { "name": contains_ignore_case(&term) },
        move |user: &User| user.name.to_lowercase().contains(&needle),
    )
}

pub fn user_by_email(term: &str) -> Specification<User> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Specification::all();
    }

    let filter = doc! { "email": contains_ignore_case(&term) };
    Specification::new(filter, move |user: &User| user.email.as_str().contains(&term))
}

/// CPF 부분 일치. 검색어의 구분 기호(`.`, `-`)는 무시합니다.
pub fn user_by_cpf(term: &str) -> Specification<User> {
    let digits: String = term.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Specification::all();
    }

    let filter = doc! { "cpf": contains_ignore_case(&digits) };
    Specification::new(filter, move |user: &User| user.cpf.as_str().contains(&digits))
}
