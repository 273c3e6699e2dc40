use serde::{Deserialize, Serialize};

use super::{replace, Entity, Patch};
use crate::document::EntityId;

/// A state (or comparable region) and the cities it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRegion {
    #[serde(rename = "_id")]
    id: EntityId,
    pub name: String,
    pub cities: Vec<City>,
}

/// City entry inside a region. `city_id` is caller-assigned and kept verbatim;
/// it is not an [`EntityId`] and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub city_id: String,
    pub name: String,
}

impl City {
    pub fn new(city_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            city_id: city_id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionDraft {
    pub name: String,
    pub cities: Vec<City>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cities: Option<Vec<City>>,
}

impl GeoRegion {
    pub fn new(name: impl Into<String>, cities: Vec<City>) -> Self {
        Self::create(RegionDraft {
            name: name.into(),
            cities,
        })
    }
}

impl Entity for GeoRegion {
    const COLLECTION: &'static str = "states_and_cities";
    const LABEL: &'static str = "State";

    type Draft = RegionDraft;
    type Patch = RegionPatch;

    fn build(id: EntityId, draft: RegionDraft) -> Self {
        Self {
            id,
            name: draft.name,
            cities: draft.cities,
        }
    }

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Patch<GeoRegion> for RegionPatch {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.cities.is_none()
    }

    fn merge_into(self, target: &mut GeoRegion) {
        replace(&mut target.name, self.name);
        replace(&mut target.cities, self.cities);
    }
}
