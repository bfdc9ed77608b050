//! The transaction model and the SQLite queries behind the transaction pages.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// Database identifier for a transaction.
pub type TransactionId = i64;

/// A single entry in the ledger: money spent or received on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The database id, assigned on creation and stable thereafter.
    pub id: TransactionId,
    /// How much money changed hands.
    pub amount: f64,
    /// The day the transaction took place.
    pub date: Date,
    /// Free text describing the transaction. May be empty.
    pub description: String,
}

/// The validated field values used to create or update a [Transaction].
///
/// Positive amounts are money in, negative amounts are money out.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFields {
    /// How much money changed hands.
    pub amount: f64,
    /// The day the transaction took place.
    pub date: Date,
    /// Free text describing the transaction. May be empty.
    pub description: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Insert a new transaction and return it with its assigned id.
///
/// # Errors
/// Returns [Error::SqlError] if the insert fails.
pub fn create_transaction(
    fields: TransactionFields,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (amount, date, description)
             VALUES (?1, ?2, ?3)
             RETURNING id, amount, date, description",
        )?
        .query_row(
            (fields.amount, fields.date, fields.description),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve the transaction with the given `id`.
///
/// # Errors
/// Returns [Error::NotFound] if no transaction has that `id`, or
/// [Error::SqlError] if the query fails.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare("SELECT id, amount, date, description FROM \"transaction\" WHERE id = :id")?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction in the order they were created.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, amount, date, description FROM \"transaction\" ORDER BY id ASC")?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

/// Overwrite the fields of the transaction `id` with `fields`.
///
/// The transaction keeps its id.
///
/// # Errors
/// Returns [Error::UpdateMissingTransaction] if no transaction has that
/// `id`, or [Error::SqlError] if the update fails.
pub fn update_transaction(
    id: TransactionId,
    fields: TransactionFields,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let rows_affected = connection.execute(
        "UPDATE \"transaction\" SET amount = ?1, date = ?2, description = ?3 WHERE id = ?4",
        (fields.amount, fields.date, &fields.description, id),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingTransaction);
    }

    Ok(Transaction {
        id,
        amount: fields.amount,
        date: fields.date,
        description: fields.description,
    })
}

/// Remove the transaction `id` from the database.
///
/// # Errors
/// Returns [Error::DeleteMissingTransaction] if no transaction has that
/// `id`, or [Error::SqlError] if the delete fails.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingTransaction);
    }

    Ok(())
}

/// Count the transactions in the database.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table if it does not already exist.
///
/// # Errors
/// Returns an error if the table or its id sequence cannot be created.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT NOT NULL
                )",
        (),
    )?;

    // Seed the id sequence so the first transaction gets id 1.
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
        (),
    )?;

    Ok(())
}

/// Map an `id, amount, date, description` row to a [Transaction].
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let date = row.get(2)?;
    let description = row.get(3)?;

    Ok(Transaction {
        id,
        amount,
        date,
        description,
    })
}

// ============================================================================
// TESTS
// ============================================================================
