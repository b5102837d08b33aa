use std::collections::HashMap;
use thiserror::Error;

use crate::model::{
    person::Person,
    statement::{Statement, StatementResult},
};

/// Field constraint violations. Messages are surfaced verbatim to callers
#[derive(Error, Debug, PartialEq)]
pub enum ApplyErrors {
    #[error("Name cannot be empty")]
    NameRequired,

    #[error("Number cannot be empty")]
    NumberRequired,
}

type RowPrimaryKey = String;

pub struct PersonTable {
    pub person_rows: HashMap<RowPrimaryKey, Person>,
}

impl PersonTable {
    pub fn new() -> Self {
        Self {
            person_rows: HashMap::<RowPrimaryKey, Person>::new(),
        }
    }

    // Each mutation statement runs in two steps
    //  - Verifying field constraints (non-empty name / number)
    //  - Applying the statement
    pub fn apply(&mut self, statement: Statement) -> Result<StatementResult, ApplyErrors> {
        let statement_result = match statement {
            Statement::Add(person) => {
                Self::check_fields(&person.name, &person.number)?;

                self.person_rows
                    .insert(person.id.to_string(), person.clone());

                StatementResult::Single(person)
            }
            Statement::Update(id, update) => {
                // Validators apply to the update itself, even when the target
                // record turns out to be absent
                Self::check_fields(&update.name, &update.number)?;

                match self.person_rows.get_mut(&id.to_string()) {
                    Some(person) => {
                        person.name = update.name;
                        person.number = update.number;

                        StatementResult::GetSingle(Some(person.clone()))
                    }
                    None => StatementResult::GetSingle(None),
                }
            }
            Statement::Remove(id) => {
                // Absence is not an error at this layer, the caller decides
                StatementResult::Deleted(self.person_rows.remove(&id.to_string()).is_some())
            }
            Statement::Get(id) => {
                StatementResult::GetSingle(self.person_rows.get(&id.to_string()).cloned())
            }
            Statement::List => {
                let persons: Vec<Person> = self.person_rows.values().cloned().collect();

                StatementResult::List(persons)
            }
            Statement::Count => StatementResult::Count(self.person_rows.len()),
        };

        Ok(statement_result)
    }

    fn check_fields(name: &str, number: &str) -> Result<(), ApplyErrors> {
        if name.is_empty() {
            return Err(ApplyErrors::NameRequired);
        }

        if number.is_empty() {
            return Err(ApplyErrors::NumberRequired);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{consts::consts::EntityId, model::person::UpdatePersonData};

    mod crud {
        use super::*;

        #[test]
        fn adding_person_stores_it_under_its_id() {
            // Given an empty table
            let mut table = PersonTable::new();

            // When we add a person
            let person = add_test_person(&mut table);

            // Then the row is stored under the person's id
            assert_eq!(table.person_rows.len(), 1);
            assert_eq!(table.person_rows.get(&person.id.to_string()), Some(&person));
        }

        #[test]
        fn getting_existing_person_returns_current_fields() {
            // Given a table with one person
            let mut table = PersonTable::new();
            let person = add_test_person(&mut table);

            // When we get by id
            let result = table
                .apply(Statement::Get(person.id.clone()))
                .expect("get should not error");

            // Then we see the stored fields
            assert_eq!(result, StatementResult::GetSingle(Some(person)));
        }

        #[test]
        fn getting_absent_person_returns_none() {
            let mut table = PersonTable::new();

            let result = table
                .apply(Statement::Get(EntityId::new()))
                .expect("get should not error");

            assert_eq!(result, StatementResult::GetSingle(None));
        }

        #[test]
        fn updating_person_overwrites_both_fields_in_place() {
            // Given a table with one person
            let mut table = PersonTable::new();
            let person = add_test_person(&mut table);

            // When we update both fields
            let result = table
                .apply(Statement::Update(
                    person.id.clone(),
                    UpdatePersonData {
                        name: "Grace Hopper".to_string(),
                        number: "045-999999".to_string(),
                    },
                ))
                .expect("update should not error");

            // Then the returned record has the new fields under the same id
            let updated = result.get_single().expect("should have a person");
            assert_eq!(updated.id, person.id);
            assert_eq!(updated.name, "Grace Hopper");
            assert_eq!(updated.number, "045-999999");

            // And a subsequent get sees the same state
            let fetched = table
                .apply(Statement::Get(person.id))
                .expect("get should not error");
            assert_eq!(fetched, StatementResult::GetSingle(Some(updated)));
        }

        #[test]
        fn updating_absent_person_returns_none() {
            let mut table = PersonTable::new();

            let result = table
                .apply(Statement::Update(
                    EntityId::new(),
                    UpdatePersonData {
                        name: "Grace Hopper".to_string(),
                        number: "045-999999".to_string(),
                    },
                ))
                .expect("update should not error");

            assert_eq!(result, StatementResult::GetSingle(None));
        }

        #[test]
        fn deleting_existing_person_removes_the_row() {
            // Given a table with one person
            let mut table = PersonTable::new();
            let person = add_test_person(&mut table);

            // When we delete it
            let result = table
                .apply(Statement::Remove(person.id.clone()))
                .expect("remove should not error");

            // Then the delete is acknowledged and the row is gone
            assert_eq!(result, StatementResult::Deleted(true));
            assert_eq!(
                table.apply(Statement::Get(person.id)),
                Ok(StatementResult::GetSingle(None))
            );
            assert_eq!(table.apply(Statement::Count), Ok(StatementResult::Count(0)));
        }

        #[test]
        fn deleting_absent_person_reports_nothing_deleted() {
            let mut table = PersonTable::new();

            let result = table
                .apply(Statement::Remove(EntityId::new()))
                .expect("remove should not error");

            assert_eq!(result, StatementResult::Deleted(false));
        }

        #[test]
        fn listing_returns_every_stored_person() {
            // Given three persons, one of which is deleted
            let mut table = PersonTable::new();
            let first = add_test_person(&mut table);
            let second = add_test_person(&mut table);
            let third = add_test_person(&mut table);

            table
                .apply(Statement::Remove(second.id))
                .expect("remove should not error");

            // When we list
            let persons = table
                .apply(Statement::List)
                .expect("list should not error")
                .list();

            // Then exactly the remaining persons are present
            assert_eq!(persons.len(), 2);
            assert!(persons.contains(&first));
            assert!(persons.contains(&third));
        }

        #[test]
        fn count_tracks_adds_and_deletes() {
            let mut table = PersonTable::new();
            let person = add_test_person(&mut table);
            add_test_person(&mut table);

            assert_eq!(table.apply(Statement::Count), Ok(StatementResult::Count(2)));

            table
                .apply(Statement::Remove(person.id))
                .expect("remove should not error");

            assert_eq!(table.apply(Statement::Count), Ok(StatementResult::Count(1)));
        }
    }

    mod field_validation {
        use super::*;

        #[test]
        fn adding_person_with_empty_name_is_rejected() {
            let mut table = PersonTable::new();

            let result = table.apply(Statement::Add(Person {
                id: EntityId::new(),
                name: String::new(),
                number: "040-123456".to_string(),
            }));

            assert_eq!(result, Err(ApplyErrors::NameRequired));
            assert!(table.person_rows.is_empty());
        }

        #[test]
        fn adding_person_with_empty_number_is_rejected() {
            let mut table = PersonTable::new();

            let result = table.apply(Statement::Add(Person {
                id: EntityId::new(),
                name: "Ada Lovelace".to_string(),
                number: String::new(),
            }));

            assert_eq!(result, Err(ApplyErrors::NumberRequired));
            assert!(table.person_rows.is_empty());
        }

        #[test]
        fn rejected_update_leaves_stored_fields_untouched() {
            // Given a table with one person
            let mut table = PersonTable::new();
            let person = add_test_person(&mut table);

            // When we update with an empty name
            let result = table.apply(Statement::Update(
                person.id.clone(),
                UpdatePersonData {
                    name: String::new(),
                    number: "045-999999".to_string(),
                },
            ));

            // Then the update is rejected and the record is unchanged
            assert_eq!(result, Err(ApplyErrors::NameRequired));
            assert_eq!(
                table.apply(Statement::Get(person.id.clone())),
                Ok(StatementResult::GetSingle(Some(person)))
            );
        }

        #[test]
        fn update_validators_run_even_when_record_is_absent() {
            let mut table = PersonTable::new();

            let result = table.apply(Statement::Update(
                EntityId::new(),
                UpdatePersonData {
                    name: "Grace Hopper".to_string(),
                    number: String::new(),
                },
            ));

            assert_eq!(result, Err(ApplyErrors::NumberRequired));
        }
    }

    fn add_test_person(table: &mut PersonTable) -> Person {
        let person = Person::new("Ada Lovelace".to_string(), "040-123456".to_string());

        table
            .apply(Statement::Add(person.clone()))
            .expect("a valid person should be accepted");

        person
    }
}
