use serde::{Deserialize, Serialize};
use uuid::Uuid;

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new() -> EntityId {
        EntityId(Uuid::new_v4().to_string())
    }

    pub fn to_string(&self) -> String {
        self.0.clone()
    }
}

/// Raised when a raw identifier does not parse into the store's id format
#[derive(Debug, PartialEq)]
pub struct EntityIdFormatError {
    pub value: String,
}

impl TryFrom<&str> for EntityId {
    type Error = EntityIdFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if Uuid::parse_str(value).is_err() {
            return Err(EntityIdFormatError {
                value: value.to_string(),
            });
        }

        Ok(EntityId(value.to_string()))
    }
}
