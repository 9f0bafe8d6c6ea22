use chrono::NaiveDateTime;
use tokio_rusqlite::Connection;
use crate::core::catalog::{CatalogError, CatalogResult};
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::date::DATE_FMT;

// opens the connection for the configured store; the in-memory variant gets
// a fresh private database per call, which is what the tests rely on
pub(crate) async fn build_db_connection(config: &Configuration,
                                        store: RepositoryStore) -> CatalogResult<Connection> {
    match store {
        RepositoryStore::Sqlite => {
            Connection::open(config.database_path.as_str()).await.map_err(CatalogError::from)
        }
        RepositoryStore::InMemorySqlite => {
            Connection::open_in_memory().await.map_err(CatalogError::from)
        }
    }
}

pub(crate) async fn create_books_table(conn: &Connection) -> CatalogResult<()> {
    conn.call(|conn| -> Result<(), rusqlite::Error> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS books (
                 book_id INTEGER PRIMARY KEY AUTOINCREMENT,
                 isbn TEXT NOT NULL,
                 title TEXT NOT NULL,
                 author TEXT NOT NULL,
                 created_at TEXT NOT NULL,
                 updated_at TEXT NOT NULL
             );
             CREATE INDEX IF NOT EXISTS books_isbn_ndx ON books (isbn);")?;
        Ok(())
    }).await.map_err(CatalogError::from)
}

pub(crate) fn string_date(date: NaiveDateTime) -> String {
    format!("{}", date.format(DATE_FMT))
}

pub(crate) fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    // e.g. 2022-09-24T04:40:35.726029
    NaiveDateTime::parse_from_str(text, DATE_FMT).ok()
}

// required to enable structured logging by the runtime
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .json()
        .init();
}

impl From<tokio_rusqlite::Error> for CatalogError {
    fn from(err: tokio_rusqlite::Error) -> Self {
        CatalogError::database(format!("sqlite database error {}", err).as_str(), None, false)
    }
}

impl From<rusqlite::Error> for CatalogError {
    fn from(err: rusqlite::Error) -> Self {
        CatalogError::database(format!("sqlite database error {}", err).as_str(), None, false)
    }
}
