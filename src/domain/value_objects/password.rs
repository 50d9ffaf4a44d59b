use std::fmt;
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppResult, ErrorContext};
use super::ValueObjectError;

/// bcrypt 해시로만 존재하는 비밀번호
///
/// 평문은 보관하지 않으며 `Debug` 출력에서도 해시를 가립니다.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Password(String);

impl Password {
    /// bcrypt 해시의 최소 길이
    pub const MIN_HASH_LEN: usize = 60;
    pub const MIN_PLAIN_LEN: usize = 6;

    /// 평문 비밀번호를 bcrypt로 해싱합니다.
    pub fn hash(plain: &str, cost: u32) -> AppResult<Self> {
        if plain.trim().is_empty() {
            return Err(ValueObjectError::new("password", "비밀번호는 필수입니다").into());
        }
        if plain.chars().count() < Self::MIN_PLAIN_LEN {
            return Err(ValueObjectError::new(
                "password",
                format!("비밀번호는 최소 {}자 이상이어야 합니다", Self::MIN_PLAIN_LEN),
            )
            .into());
        }

        let hash = bcrypt::hash(plain, cost).context("비밀번호 해싱 실패")?;

        Ok(Self::from_hash(&hash)?)
    }

    /// 저장된 해시로부터 복원합니다.
    pub fn from_hash(hash: &str) -> Result<Self, ValueObjectError> {
        if hash.trim().is_empty() {
            return Err(ValueObjectError::new("password", "비밀번호 해시가 비어 있습니다"));
        }
        if hash.len() < Self::MIN_HASH_LEN {
            return Err(ValueObjectError::new("password", "비밀번호 해시 형식이 올바르지 않습니다"));
        }
        Ok(Self(hash.to_string()))
    }

    /// 후보 평문이 이 해시와 일치하는지 확인합니다.
    pub fn verify(&self, candidate: &str) -> bool {
        bcrypt::verify(candidate, &self.0).unwrap_or_else(|e| {
            log::warn!("비밀번호 검증 중 오류: {}", e);
            false
        })
    }
}

impl TryFrom<String> for Password {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hash(&value)
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let password = Password::hash("segredo123", TEST_COST).unwrap();

        assert!(password.verify("segredo123"));
        assert!(!password.verify("segredo124"));
        assert!(!password.verify(""));
    }

    #[test]
    fn test_plaintext_rules() {
        assert!(matches!(Password::hash("   ", TEST_COST), Err(AppError::ValidationError(_))));
        assert!(matches!(Password::hash("abc12", TEST_COST), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_from_hash_rejects_short_values() {
        assert!(Password::from_hash("plaintext").is_err());
        assert!(Password::from_hash("").is_err());

        let stored = bcrypt::hash("segredo123", TEST_COST).unwrap();
        assert!(Password::from_hash(&stored).unwrap().verify("segredo123"));
    }

    #[test]
    fn test_debug_hides_hash() {
        let password = Password::hash("segredo123", TEST_COST).unwrap();
        assert_eq!(format!("{:?}", password), "Password(***)");
    }
}
