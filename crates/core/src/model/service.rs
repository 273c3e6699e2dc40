use serde::{Deserialize, Serialize};

use super::embedded::{RequiredDocument, Update};
use super::{replace, Entity, Patch};
use crate::document::EntityId;

/// Online government service. Unlike postings it has no date range and no sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalService {
    #[serde(rename = "_id")]
    id: EntityId,
    pub title: String,
    pub description: String,
    pub required_documents: Vec<RequiredDocument>,
    pub updates: Vec<Update>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    pub required_documents: Vec<RequiredDocument>,
    pub updates: Vec<Update>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServicePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required_documents: Option<Vec<RequiredDocument>>,
    #[serde(default)]
    pub updates: Option<Vec<Update>>,
    #[serde(default)]
    pub states: Option<Vec<String>>,
    #[serde(default)]
    pub cities: Option<Vec<String>>,
}

impl Entity for DigitalService {
    const COLLECTION: &'static str = "digital_services";
    const LABEL: &'static str = "Digital service";

    type Draft = ServiceDraft;
    type Patch = ServicePatch;

    fn build(id: EntityId, draft: ServiceDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            required_documents: draft.required_documents,
            updates: draft.updates,
            states: draft.states,
            cities: draft.cities,
        }
    }

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Patch<DigitalService> for ServicePatch {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.required_documents.is_none()
            && self.updates.is_none()
            && self.states.is_none()
            && self.cities.is_none()
    }

    fn merge_into(self, target: &mut DigitalService) {
        replace(&mut target.title, self.title);
        replace(&mut target.description, self.description);
        replace(&mut target.required_documents, self.required_documents);
        replace(&mut target.updates, self.updates);
        replace(&mut target.states, self.states);
        replace(&mut target.cities, self.cities);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> DigitalService {
        DigitalService::create(
            serde_json::from_value(json!({
                "title": "Online Tax Filing Service",
                "description": "Digital service for filing taxes online",
                "required_documents": [{ "name": "PAN Card", "type": "ID" }],
                "updates": [],
                "states": ["All"],
                "cities": []
            }))
            .unwrap(),
        )
    }

    #[test]
    fn absent_document_fields_become_none() {
        let svc = service();
        assert_eq!(svc.required_documents[0].description, None);
    }

    #[test]
    fn patch_replaces_documents_and_keeps_rest() {
        let mut svc = service();
        let id = svc.id().clone();
        let patch: ServicePatch = serde_json::from_value(json!({
            "required_documents": [{ "name": "Form 16" }, { "name": "Bank statement" }]
        }))
        .unwrap();
        patch.apply(&mut svc).unwrap();
        assert_eq!(svc.id(), &id);
        assert_eq!(svc.required_documents.len(), 2);
        assert_eq!(svc.required_documents[0].name, "Form 16");
        assert_eq!(svc.states, vec!["All".to_string()]);
    }

    #[test]
    fn wire_form_omits_posting_fields() {
        let value = serde_json::to_value(service()).unwrap();
        assert!(value.get("start_date").is_none());
        assert!(value.get("sector_id").is_none());
    }
}
