use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One card's worth of data as served by the Data Service.
///
/// The service does not validate documents, so every field is read leniently:
/// missing keys, `null`s and nested values render as empty text, numbers and
/// booleans as their JSON text. Fields the cards do not show are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    #[serde(rename = "_id", deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub summary: String,
    #[serde(deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(deserialize_with = "lenient_text")]
    pub thumbnail_url: String,
    #[serde(deserialize_with = "lenient_text")]
    pub author: String,
    #[serde(deserialize_with = "lenient_text")]
    pub publication_date: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}
