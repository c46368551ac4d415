//! Articles are stored by an external ingester and served as-is.
//!
//! The service never deserializes into a fixed struct: every stored field is
//! passed through, so the only model-level concern is how store-native BSON
//! values are rendered as JSON.

use chrono::SecondsFormat;
use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

pub const ARTICLES_COLLECTION: &str = "articles";

/// Sole sort key, newest first.
pub const PUBLICATION_DATE: &str = "publication_date";

/// Render a stored article as JSON, keeping every field and its order.
pub fn document_to_json(document: Document) -> Value {
    let map: Map<String, Value> = document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect();
    Value::Object(map)
}

/// Object ids become hex strings and datetimes RFC 3339 UTC strings with
/// millisecond precision (`2024-01-01T00:00:00.000Z`); everything else uses
/// relaxed extended JSON.
fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => {
            Value::String(dt.to_chrono().to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
