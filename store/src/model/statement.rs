use crate::{
    consts::consts::EntityId,
    model::person::{Person, UpdatePersonData},
};

#[derive(Clone, Debug)]
pub enum Statement {
    Add(Person),
    Update(EntityId, UpdatePersonData),
    Remove(EntityId),
    Get(EntityId),
    /// Returns a list of Person, order unspecified
    List,
    /// Returns the number of stored Person records
    Count,
}

impl Statement {
    pub fn is_mutation(&self) -> bool {
        match self {
            Statement::Add(_) | Statement::Remove(_) | Statement::Update(_, _) => true,
            Statement::Get(_) | Statement::List | Statement::Count => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatementResult {
    /// Used for store status messages
    SuccessStatus(String),
    Single(Person),
    GetSingle(Option<Person>),
    /// Whether a Remove statement found a record to delete
    Deleted(bool),
    List(Vec<Person>),
    Count(usize),
}

impl StatementResult {
    pub fn single(self) -> Person {
        if let StatementResult::Single(p) = self {
            p
        } else {
            panic!("Statement result is not of type Single")
        }
    }

    pub fn get_single(self) -> Option<Person> {
        if let StatementResult::GetSingle(p) = self {
            p
        } else {
            panic!("Statement result is not of type GetSingle")
        }
    }

    pub fn deleted(self) -> bool {
        if let StatementResult::Deleted(d) = self {
            d
        } else {
            panic!("Statement result is not of type Deleted")
        }
    }

    pub fn list(self) -> Vec<Person> {
        if let StatementResult::List(l) = self {
            l
        } else {
            panic!("Statement result is not of type List")
        }
    }

    pub fn count(self) -> usize {
        if let StatementResult::Count(c) = self {
            c
        } else {
            panic!("Statement result is not of type Count")
        }
    }

    pub fn success_status(self) -> String {
        if let StatementResult::SuccessStatus(s) = self {
            s
        } else {
            panic!("Statement result is not of type SuccessStatus")
        }
    }
}
