//! Entity families persisted by the service and their partial-update patches.

pub mod embedded;
pub mod posting;
pub mod region;
pub mod sector;
pub mod service;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::document::EntityId;
use crate::error::{StoreError, StoreResult};

pub use embedded::{RequiredDocument, Update};
pub use posting::{GovJob, GovJobPost, Posting, PostingDraft, PostingKind, PostingPatch, Scheme, SchemePost};
pub use region::{City, GeoRegion, RegionDraft, RegionPatch};
pub use sector::{Sector, SectorDraft, SectorPatch};
pub use service::{DigitalService, ServiceDraft, ServicePatch};

/// A record type stored in its own collection.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Name of the backing collection.
    const COLLECTION: &'static str;
    /// Human readable name used in messages ("Sector not found").
    const LABEL: &'static str;

    /// Creation payload: every field except the id.
    type Draft: DeserializeOwned + Send + 'static;
    type Patch: Patch<Self> + DeserializeOwned + Send + 'static;

    fn build(id: EntityId, draft: Self::Draft) -> Self;

    fn id(&self) -> &EntityId;

    /// Build a new entity under a freshly generated id.
    fn create(draft: Self::Draft) -> Self {
        Self::build(EntityId::generate(), draft)
    }
}

/// A set of field replacements for an entity. Every field is optional; the
/// ones present overwrite the target wholesale, sequences included.
pub trait Patch<E>: Sized {
    fn is_empty(&self) -> bool;

    /// Overwrite the fields present in the patch.
    fn merge_into(self, target: &mut E);

    /// Like [`Patch::merge_into`] but rejects a patch that names no field.
    fn apply(self, target: &mut E) -> StoreResult<()> {
        if self.is_empty() {
            return Err(StoreError::EmptyUpdate);
        }
        self.merge_into(target);
        Ok(())
    }
}

/// Deserializer for `Option<Option<T>>` patch fields: an absent member stays
/// `None` (via `#[serde(default)]`), an explicit `null` becomes `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Some)
}

/// Overwrite `target` when the patch carries a value.
pub(crate) fn replace<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
