//! 사용자 애그리거트

use std::fmt;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::core::errors::AppResult;
use crate::domain::entities::base::{AuditInfo, Auditable, impl_auditable};
use crate::domain::value_objects::{Cpf, Email, Password, PhoneNumber, ValueObjectError};

/// 사용자 권한
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "User",
            UserRole::Admin => "Admin",
        }
    }

    /// 대소문자를 구분하지 않고 파싱합니다.
    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        match raw.trim().to_lowercase().as_str() {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            _ => Err(ValueObjectError::new("role", format!("지원하지 않는 권한입니다: {}", raw))),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: Email,
    pub password: Password,
    pub phone_number: PhoneNumber,
    pub cpf: Cpf,
    #[serde(default)]
    pub role: UserRole,
    pub audit: AuditInfo,
}

impl_auditable!(User, "사용자");

/// 사용자 이름 길이 제한
const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 100;

fn normalize_name(name: &str) -> Result<String, ValueObjectError> {
    let trimmed = name.trim();
    let length = trimmed.chars().count();

    if length < NAME_MIN_CHARS || length > NAME_MAX_CHARS {
        return Err(ValueObjectError::new(
            "name",
            format!("이름은 {}~{}자 사이여야 합니다", NAME_MIN_CHARS, NAME_MAX_CHARS),
        ));
    }
    Ok(trimmed.to_string())
}

impl User {
    pub fn new(
        name: &str,
        email: Email,
        password: Password,
        phone_number: PhoneNumber,
        cpf: Cpf,
        role: UserRole,
        created_by: Option<ObjectId>,
    ) -> AppResult<Self> {
        Ok(Self {
            id: ObjectId::new(),
            name: normalize_name(name)?,
            email,
            password,
            phone_number,
            cpf,
            role,
            audit: AuditInfo::new(created_by),
        })
    }

    /// 프로필 수정. 이메일은 변경 대상이 아닙니다.
    pub fn update_profile(
        &mut self,
        name: &str,
        phone_number: PhoneNumber,
        cpf: Cpf,
        role: UserRole,
        modified_by: Option<ObjectId>,
    ) -> AppResult<()> {
        self.ensure_not_deleted()?;

        self.name = normalize_name(name)?;
        self.phone_number = phone_number;
        self.cpf = cpf;
        self.role = role;
        self.audit.record_modification(modified_by);
        Ok(())
    }

    pub fn change_password(&mut self, password: Password, modified_by: Option<ObjectId>) -> AppResult<()> {
        self.ensure_not_deleted()?;

        self.password = password;
        self.audit.record_modification(modified_by);
        Ok(())
    }

    pub fn delete(&mut self, deleted_by: Option<ObjectId>) -> AppResult<()> {
        self.mark_deleted(deleted_by)
    }

    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::entities::base::EntityStatus;

    fn sample_user() -> User {
        User::new(
            "  Maria Souza ",
            Email::parse("maria@sni.org").unwrap(),
            Password::hash("segredo123", 4).unwrap(),
            PhoneNumber::parse("11987654321").unwrap(),
            Cpf::parse("52998224725").unwrap(),
            UserRole::User,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_new_user_is_active_with_trimmed_name() {
        let user = sample_user();

        assert_eq!(user.name, "Maria Souza");
        assert_eq!(user.audit.status, EntityStatus::Active);
        assert!(user.audit.modified_at.is_none());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_short_name_is_rejected() {
        let result = User::new(
            "Al",
            Email::parse("al@sni.org").unwrap(),
            Password::hash("segredo123", 4).unwrap(),
            PhoneNumber::parse("11987654321").unwrap(),
            Cpf::parse("52998224725").unwrap(),
            UserRole::User,
            None,
        );
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_update_profile_records_modification() {
        let mut user = sample_user();
        let admin = ObjectId::new();

        user.update_profile(
            "Maria S.",
            PhoneNumber::parse("21999998888").unwrap(),
            Cpf::parse("11144477735").unwrap(),
            UserRole::Admin,
            Some(admin),
        )
        .unwrap();

        assert_eq!(user.cpf.as_str(), "11144477735");
        assert!(user.is_admin());
        assert_eq!(user.audit.modified_by, Some(admin));
        assert_eq!(user.email.as_str(), "maria@sni.org");
    }

    #[test]
    fn test_deleted_user_cannot_be_changed() {
        let mut user = sample_user();
        user.delete(None).unwrap();

        assert!(user.audit.deleted_at.is_some());
        assert!(matches!(user.delete(None), Err(AppError::ConflictError(_))));
        assert!(matches!(
            user.change_password(Password::hash("outrasenha", 4).unwrap(), None),
            Err(AppError::ConflictError(_))
        ));
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(UserRole::parse("ADMIN").unwrap(), UserRole::Admin);
        assert_eq!(UserRole::parse(" user ").unwrap(), UserRole::User);
        assert!(UserRole::parse("root").is_err());
    }

    #[test]
    fn test_bson_round_trip_keeps_value_objects() {
        let user = sample_user();
        let document = mongodb::bson::to_document(&user).unwrap();

        assert_eq!(document.get_str("email").unwrap(), "maria@sni.org");
        assert_eq!(document.get_document("audit").unwrap().get_str("status").unwrap(), "Active");

        let restored: User = mongodb::bson::from_document(document).unwrap();
        assert_eq!(restored.cpf, user.cpf);
        assert!(restored.password.verify("segredo123"));
    }
}
