use crate::model::statement::{Statement, StatementResult};

use super::table::ApplyErrors;

/// Commands are how callers interact with the store. The bulk of interactions
/// are CRUD statements, Shutdown stops the worker after acknowledging.
#[derive(Debug)]
pub enum StoreCommand {
    Statement(Statement),
    Shutdown,
}

pub struct StoreRequest {
    pub resolver: oneshot::Sender<Result<StatementResult, ApplyErrors>>,
    pub command: StoreCommand,
}
