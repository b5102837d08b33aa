use crate::model::statement::StatementResult;

use super::{
    commands::{StoreCommand, StoreRequest},
    person_store::PersonStore,
    table::PersonTable,
};

/// Owns the person table and processes requests from a single worker thread,
/// strictly in arrival order. All access goes through a [`PersonStore`] handle.
pub struct Store {
    person_table: PersonTable,
    request_receiver: flume::Receiver<StoreRequest>,
    request_sender: flume::Sender<StoreRequest>,
}

impl Store {
    pub fn new() -> Self {
        let (request_sender, request_receiver) = flume::unbounded();

        Self {
            person_table: PersonTable::new(),
            request_receiver,
            request_sender,
        }
    }

    /// Spawns the store worker and returns the handle used to reach it
    pub fn run(self) -> PersonStore {
        let person_store = PersonStore::new(self.request_sender.clone());

        std::thread::Builder::new()
            .name("store-worker".to_string())
            .spawn(move || self.process_requests())
            .expect("should be able to spawn the store worker thread");

        person_store
    }

    fn process_requests(mut self) {
        // self keeps a sender alive, so the loop only ends via Shutdown
        while let Ok(StoreRequest { resolver, command }) = self.request_receiver.recv() {
            match command {
                StoreCommand::Statement(statement) => {
                    let level = if statement.is_mutation() {
                        log::Level::Info
                    } else {
                        log::Level::Debug
                    };

                    log::log!(level, "Applying statement: {:?}", statement);

                    let result = self.person_table.apply(statement);

                    // The caller may have hung up before the reply
                    let _ = resolver.send(result);
                }
                StoreCommand::Shutdown => {
                    let _ = resolver.send(Ok(StatementResult::SuccessStatus(
                        "Successfully shut down store".to_string(),
                    )));

                    return;
                }
            }
        }
    }
}
