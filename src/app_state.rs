//! The state shared by every route handler.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize};

/// The application state handed to the router.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The SQLite connection shared by the handlers.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wrap `db_connection` in a new [AppState], creating the schema first.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}
