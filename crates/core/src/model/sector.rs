use serde::{Deserialize, Serialize};

use super::{nullable, replace, Entity, Patch};
use crate::document::EntityId;

/// Economic or administrative sector that postings are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    #[serde(rename = "_id")]
    id: EntityId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectorDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectorPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
}

impl Sector {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self::create(SectorDraft {
            name: name.into(),
            description,
        })
    }
}

impl Entity for Sector {
    const COLLECTION: &'static str = "sectors";
    const LABEL: &'static str = "Sector";

    type Draft = SectorDraft;
    type Patch = SectorPatch;

    fn build(id: EntityId, draft: SectorDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
        }
    }

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Patch<Sector> for SectorPatch {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    fn merge_into(self, target: &mut Sector) {
        replace(&mut target.name, self.name);
        replace(&mut target.description, self.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use serde_json::json;

    #[test]
    fn patch_updates_only_description() {
        let mut sector = Sector::new("Education", Some("old".into()));
        let patch: SectorPatch = serde_json::from_value(json!({ "description": "new text" })).unwrap();
        patch.apply(&mut sector).unwrap();
        assert_eq!(sector.name, "Education");
        assert_eq!(sector.description.as_deref(), Some("new text"));
    }

    #[test]
    fn explicit_null_clears_description() {
        let mut sector = Sector::new("Education", Some("old".into()));
        let patch: SectorPatch = serde_json::from_value(json!({ "description": null })).unwrap();
        assert!(!patch.is_empty());
        patch.apply(&mut sector).unwrap();
        assert_eq!(sector.description, None);
    }

    #[test]
    fn empty_patch_is_rejected() {
        let mut sector = Sector::new("Education", None);
        let before = sector.clone();
        let patch: SectorPatch = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(patch.apply(&mut sector), Err(StoreError::EmptyUpdate)));
        assert_eq!(sector, before);
    }

    #[test]
    fn wire_form_uses_reserved_id_key() {
        let sector = Sector::new("Health", None);
        let value = serde_json::to_value(&sector).unwrap();
        assert_eq!(value["_id"], json!(sector.id().as_str()));
        assert_eq!(value["description"], json!(null));
    }
}
