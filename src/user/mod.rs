use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod endpoints;
pub mod manager;
pub mod source;
pub mod store;
pub use endpoints::*;

pub type UserId = i64;

/// A user as returned by the user api. Only `id` and `name` are interpreted;
/// everything else is carried through untouched.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> User {
        User {
            id,
            name: name.into(),
            details: Map::new(),
        }
    }
}
