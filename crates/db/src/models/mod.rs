pub mod task;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Strip surrounding whitespace while deserializing, so field rules see the
/// value that will be stored.
pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}
