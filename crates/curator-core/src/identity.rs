use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Caller identity supplied by the hosting environment.
///
/// Canonical form is `0x` followed by 40 lower-case hex digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed account id: {0:?}")]
pub struct MalformedAccountId(pub String);

impl AccountId {
    pub fn parse(raw: &str) -> Result<Self, MalformedAccountId> {
        let s = raw.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| MalformedAccountId(raw.to_string()))?;
        if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MalformedAccountId(raw.to_string()));
        }
        Ok(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountId {
    type Err = MalformedAccountId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case() {
        let id = AccountId::parse("0xABCDEF0123456789abcdef0123456789ABCDEF01").unwrap();
        assert_eq!(id.as_str(), "0xabcdef0123456789abcdef0123456789abcdef01");
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(AccountId::parse("").is_err());
        assert!(AccountId::parse("abcdef0123456789abcdef0123456789abcdef01").is_err());
        assert!(AccountId::parse("0x1234").is_err());
        assert!(AccountId::parse("0xZZcdef0123456789abcdef0123456789abcdef01").is_err());
    }

    #[test]
    fn serde_uses_string_form() {
        let id: AccountId =
            serde_json::from_str("\"0x00000000000000000000000000000000000000aa\"").unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"0x00000000000000000000000000000000000000aa\""
        );
        assert!(serde_json::from_str::<AccountId>("\"nope\"").is_err());
    }
}
