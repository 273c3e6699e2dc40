pub mod id;
pub mod model;

pub use id::{EntityId, ObjectKey};
pub use model::{StoredDocument, ID_FIELD};
