use std::fmt::Debug;
use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::embedded::{timestamp, RequiredDocument, Update};
use super::{replace, Entity, Patch};
use crate::document::EntityId;

/// Distinguishes posting families that share one shape but live in
/// separate collections.
pub trait PostingKind: Debug + Clone + Copy + PartialEq + Eq + Send + Sync + 'static {
    const COLLECTION: &'static str;
    const LABEL: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme;

impl PostingKind for Scheme {
    const COLLECTION: &'static str = "scheme_posts";
    const LABEL: &'static str = "Scheme post";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GovJob;

impl PostingKind for GovJob {
    const COLLECTION: &'static str = "gov_jobs_posts";
    const LABEL: &'static str = "Government job post";
}

/// Government scheme announcement.
pub type SchemePost = Posting<Scheme>;
/// Government job advertisement.
pub type GovJobPost = Posting<GovJob>;

/// Time-boxed announcement with its paperwork, coverage and change log.
///
/// `states` and `cities` are free-form labels, not references into the
/// region collection. `sector_id` points into the sector collection but is
/// not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Posting<K: PostingKind> {
    #[serde(rename = "_id")]
    id: EntityId,
    pub title: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub end_date: DateTime<Utc>,
    pub description: String,
    pub required_documents: Vec<RequiredDocument>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
    pub updates: Vec<Update>,
    pub sector_id: String,
    #[serde(skip)]
    kind: PhantomData<K>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostingDraft {
    pub title: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub end_date: DateTime<Utc>,
    pub description: String,
    pub required_documents: Vec<RequiredDocument>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
    pub updates: Vec<Update>,
    pub sector_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostingPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required_documents: Option<Vec<RequiredDocument>>,
    #[serde(default)]
    pub states: Option<Vec<String>>,
    #[serde(default)]
    pub cities: Option<Vec<String>>,
    #[serde(default)]
    pub updates: Option<Vec<Update>>,
    #[serde(default)]
    pub sector_id: Option<String>,
}

impl<K: PostingKind> Entity for Posting<K> {
    const COLLECTION: &'static str = K::COLLECTION;
    const LABEL: &'static str = K::LABEL;

    type Draft = PostingDraft;
    type Patch = PostingPatch;

    fn build(id: EntityId, draft: PostingDraft) -> Self {
        Self {
            id,
            title: draft.title,
            start_date: draft.start_date,
            end_date: draft.end_date,
            description: draft.description,
            required_documents: draft.required_documents,
            states: draft.states,
            cities: draft.cities,
            updates: draft.updates,
            sector_id: draft.sector_id,
            kind: PhantomData,
        }
    }

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl<K: PostingKind> Patch<Posting<K>> for PostingPatch {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.description.is_none()
            && self.required_documents.is_none()
            && self.states.is_none()
            && self.cities.is_none()
            && self.updates.is_none()
            && self.sector_id.is_none()
    }

    fn merge_into(self, target: &mut Posting<K>) {
        replace(&mut target.title, self.title);
        replace(&mut target.start_date, self.start_date);
        replace(&mut target.end_date, self.end_date);
        replace(&mut target.description, self.description);
        replace(&mut target.required_documents, self.required_documents);
        replace(&mut target.states, self.states);
        replace(&mut target.cities, self.cities);
        replace(&mut target.updates, self.updates);
        replace(&mut target.sector_id, self.sector_id);
    }
}
