/// Entity identifier utilities.
///
/// Identifiers are document-store ObjectIds. In memory an id is always its
/// canonical 24-character lowercase hex rendering; the 12-byte
/// [`ObjectKey`] only exists inside the storage layer.
use std::fmt;

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Opaque identifier of a stored entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        ObjectKey::generate().to_id()
    }

    /// Parse a caller-supplied identifier. Either hex case is accepted; the
    /// stored form is lowercase.
    pub fn parse(raw: &str) -> StoreResult<Self> {
        ObjectKey::from_hex(raw).map(ObjectKey::to_id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EntityId {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Native 12-byte primary key of the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectKey(ObjectId);

impl ObjectKey {
    pub(crate) fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub(crate) fn from_id(id: &EntityId) -> StoreResult<Self> {
        Self::from_hex(id.as_str())
    }

    pub(crate) fn from_hex(raw: &str) -> StoreResult<Self> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| StoreError::InvalidIdentifier(raw.to_string()))
    }

    /// Rebuild a key read back from a backend. `None` if the length is wrong.
    pub(crate) fn from_slice(raw: &[u8]) -> Option<Self> {
        <[u8; 12]>::try_from(raw)
            .ok()
            .map(|bytes| Self(ObjectId::from_bytes(bytes)))
    }

    pub(crate) fn to_id(self) -> EntityId {
        EntityId(self.0.to_hex())
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.0.bytes()
    }
}
