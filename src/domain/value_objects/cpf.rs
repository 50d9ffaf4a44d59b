use std::fmt;
use serde::{Deserialize, Serialize};
use super::ValueObjectError;

/// 11자리 브라질 납세자 번호 (CPF)
///
/// 숫자만 보관합니다. 입력의 `.`, `-` 등 비숫자 문자는 제거됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();

        if digits.len() != 11 {
            return Err(ValueObjectError::new("cpf", "CPF는 11자리 숫자여야 합니다"));
        }
        if digits.iter().all(|d| *d == digits[0]) {
            return Err(ValueObjectError::new("cpf", "유효하지 않은 CPF입니다"));
        }

        let first = check_digit(&digits[..9]);
        let second = check_digit(&digits[..10]);

        if digits[9] != first || digits[10] != second {
            return Err(ValueObjectError::new("cpf", "유효하지 않은 CPF입니다"));
        }

        Ok(Self(digits.iter().map(|d| char::from_digit(*d, 10).unwrap_or('0')).collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `000.000.000-00` 표기
    pub fn formatted(&self) -> String {
        format!("{}.{}.{}-{}", &self.0[..3], &self.0[3..6], &self.0[6..9], &self.0[9..])
    }
}

/// 가중치 (len+1)..=2 로 계산한 검증 숫자
fn check_digit(digits: &[u32]) -> u32 {
    let weight_start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

impl TryFrom<String> for Cpf {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
