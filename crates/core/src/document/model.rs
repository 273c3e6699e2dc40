use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::id::{EntityId, ObjectKey};
use crate::error::{StoreError, StoreResult};

/// Reserved member carrying the entity id in wire and storage form.
pub const ID_FIELD: &str = "_id";

/// Storage form of an entity: the native primary key plus the remaining
/// fields as a JSON object. The id is never duplicated inside `content`.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub key: ObjectKey,
    pub content: Map<String, Value>,
}

impl StoredDocument {
    /// Serialize an entity into its storage form.
    pub(crate) fn encode<E: Serialize>(collection: &'static str, entity: &E) -> StoreResult<Self> {
        let mut content = match serde_json::to_value(entity) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(StoreError::Malformed {
                    collection,
                    reason: format!("expected an object, got {other}"),
                })
            }
            Err(e) => {
                return Err(StoreError::Malformed {
                    collection,
                    reason: e.to_string(),
                })
            }
        };

        let id = match content.remove(ID_FIELD) {
            Some(Value::String(raw)) => EntityId::parse(&raw)?,
            _ => {
                return Err(StoreError::MissingField {
                    collection,
                    field: ID_FIELD.to_string(),
                })
            }
        };

        Ok(Self {
            key: ObjectKey::from_id(&id)?,
            content,
        })
    }

    /// Rebuild an entity from its storage form.
    pub(crate) fn decode<E: DeserializeOwned>(self, collection: &'static str) -> StoreResult<E> {
        let mut content = self.content;
        content.insert(
            ID_FIELD.to_string(),
            Value::String(self.key.to_id().into()),
        );
        serde_json::from_value(Value::Object(content)).map_err(|e| classify(collection, e))
    }
}

/// Split serde failures into missing required members and everything else.
fn classify(collection: &'static str, err: serde_json::Error) -> StoreError {
    let message = err.to_string();
    match missing_field_name(&message) {
        Some(field) => StoreError::MissingField {
            collection,
            field: field.to_string(),
        },
        None => StoreError::Malformed {
            collection,
            reason: message,
        },
    }
}

// Relies on serde's `de::Error::missing_field` wording, "missing field `name`",
// which serde_json 1.x passes through unprefixed from `from_value`. Nested
// members report their own name, not a path.
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split_once('`').map(|(field, _)| field)
}
