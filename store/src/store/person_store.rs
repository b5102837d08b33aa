use thiserror::Error;

use crate::{
    consts::consts::{EntityId, EntityIdFormatError},
    model::{
        person::{Person, UpdatePersonData},
        statement::{Statement, StatementResult},
    },
};

use super::{
    commands::{StoreCommand, StoreRequest},
    table::ApplyErrors,
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("malformatted id: {0}")]
    MalformedId(String),

    #[error("{0}")]
    Validation(#[from] ApplyErrors),

    #[error("store worker is no longer running")]
    Disconnected,
}

impl From<EntityIdFormatError> for StoreError {
    fn from(error: EntityIdFormatError) -> Self {
        StoreError::MalformedId(error.value)
    }
}

/// Cloneable handle to the store worker.
///
/// Each operation sends one statement over the request channel and resolves
/// once the worker replies on the per-request oneshot channel. Operations that
/// take a raw identifier parse it up front, a malformed id never reaches the
/// worker. Absent records surface as `None` / `false`, not as errors.
#[derive(Clone)]
pub struct PersonStore {
    store_sender: flume::Sender<StoreRequest>,
}

impl PersonStore {
    pub fn new(store_sender: flume::Sender<StoreRequest>) -> Self {
        Self { store_sender }
    }

    pub async fn find_all(&self) -> Result<Vec<Person>, StoreError> {
        Ok(self.send_statement(Statement::List).await?.list())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Person>, StoreError> {
        let id = EntityId::try_from(id)?;

        Ok(self.send_statement(Statement::Get(id)).await?.get_single())
    }

    /// Persists a new person, the store assigns the id
    pub async fn insert(&self, name: String, number: String) -> Result<Person, StoreError> {
        let person = Person::new(name, number);

        Ok(self.send_statement(Statement::Add(person)).await?.single())
    }

    pub async fn update_by_id(
        &self,
        id: &str,
        update: UpdatePersonData,
    ) -> Result<Option<Person>, StoreError> {
        let id = EntityId::try_from(id)?;

        Ok(self
            .send_statement(Statement::Update(id, update))
            .await?
            .get_single())
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let id = EntityId::try_from(id)?;

        Ok(self.send_statement(Statement::Remove(id)).await?.deleted())
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.send_statement(Statement::Count).await?.count())
    }

    /// Blocking shutdown request, for use outside the async runtime (e.g. a
    /// signal handler). Returns the worker's acknowledgment message.
    pub fn send_shutdown_request(&self) -> Result<String, StoreError> {
        let (resolver, response_receiver) = oneshot::channel();

        self.store_sender
            .send(StoreRequest {
                resolver,
                command: StoreCommand::Shutdown,
            })
            .map_err(|_| StoreError::Disconnected)?;

        let result = response_receiver
            .recv()
            .map_err(|_| StoreError::Disconnected)??;

        Ok(result.success_status())
    }

    async fn send_statement(&self, statement: Statement) -> Result<StatementResult, StoreError> {
        let (resolver, response_receiver) = oneshot::channel();

        let request = StoreRequest {
            resolver,
            command: StoreCommand::Statement(statement),
        };

        // Non-blocking send, the worker replies on the oneshot channel once the
        // statement has been applied
        self.store_sender
            .send(request)
            .map_err(|_| StoreError::Disconnected)?;

        let response = response_receiver
            .await
            .map_err(|_| StoreError::Disconnected)?;

        Ok(response?)
    }
}
