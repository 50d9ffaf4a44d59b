use std::fmt;
use serde::{Deserialize, Serialize};
use super::ValueObjectError;

/// 10~15자리 숫자로 정규화된 전화번호
///
/// 공백, `-`, `(`, `)`, `.`, 선행 `+`는 구분자로 보고 제거합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub const MIN_DIGITS: usize = 10;
    pub const MAX_DIGITS: usize = 15;

    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        let trimmed = raw.trim();
        let without_prefix = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits: String = without_prefix
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
            .collect();

        if digits.is_empty() {
            return Err(ValueObjectError::new("phone_number", "전화번호는 필수입니다"));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValueObjectError::new("phone_number", "전화번호는 숫자만 포함해야 합니다"));
        }
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len()) {
            return Err(ValueObjectError::new(
                "phone_number",
                format!("전화번호는 {}~{}자리여야 합니다", Self::MIN_DIGITS, Self::MAX_DIGITS),
            ));
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
