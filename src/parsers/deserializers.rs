use serde::de::Error;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

fn validate_uuid<E: Error>(s: String) -> Result<String, E> {
    if s.is_empty() {
        return Err(E::custom("uuid cannot be empty"));
    }

    Uuid::parse_str(&s).map_err(|e| E::custom(format!("invalid UUID format: {}", e)))?;

    Ok(s)
}

/// Custom deserializer for required UUID fields
pub fn deserialize_uuid<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    validate_uuid(s)
}

/// Custom deserializer for optional UUID fields, `null` is accepted as absent
pub fn deserialize_optional_uuid<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => validate_uuid(s).map(Some),
        None => Ok(None),
    }
}
