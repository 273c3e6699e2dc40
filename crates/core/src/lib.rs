//! Persistence layer for government schemes, job postings, digital services,
//! sectors and state/city reference data.
//!
//! Entities live in [`model`], the storage-form codec and identifiers in
//! [`document`], backend handles in [`store`] and the generic CRUD logic in
//! [`repo`].

pub mod document;
pub mod error;
pub mod model;
pub mod repo;
pub mod store;

pub use document::EntityId;
pub use error::{StoreError, StoreResult};
pub use model::{
    City, DigitalService, Entity, GeoRegion, GovJobPost, Patch, Posting, RequiredDocument,
    SchemePost, Sector, Update,
};
pub use repo::Repository;
pub use store::{DocumentCollection, DocumentStore, MemoryStore, PgStore};
