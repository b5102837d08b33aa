use serde::{Deserialize, Serialize};

use crate::consts::consts::EntityId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: EntityId,
    pub name: String,
    pub number: String,
}

impl Person {
    pub fn new(name: String, number: String) -> Self {
        Person {
            id: EntityId::new(),
            name,
            number,
        }
    }

    pub fn new_test() -> Self {
        Person {
            id: EntityId("1".to_string()),
            name: "Ada Lovelace".to_string(),
            number: "040-123456".to_string(),
        }
    }
}

/// Full overwrite of a person's mutable fields, the id is never updated
#[derive(Clone, Debug, PartialEq)]
pub struct UpdatePersonData {
    pub name: String,
    pub number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_serializes_with_a_flat_string_id() {
        let person = Person::new_test();

        let json = serde_json::to_value(&person).expect("person should serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "Ada Lovelace",
                "number": "040-123456",
            })
        );
    }

    #[test]
    fn new_persons_get_distinct_ids() {
        let first = Person::new("Ada".to_string(), "123".to_string());
        let second = Person::new("Ada".to_string(), "123".to_string());

        assert_ne!(first.id, second.id);
    }
}
