use crate::books::repository::BookRepository;
use crate::books::repository::sqlite_book_repository::SqliteBookRepository;
use crate::core::catalog::CatalogResult;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::sqlite::{build_db_connection, create_books_table};

pub(crate) async fn create_book_repository(config: &Configuration,
                                           store: RepositoryStore) -> CatalogResult<Box<dyn BookRepository>> {
    let conn = build_db_connection(config, store).await?;
    create_books_table(&conn).await?;
    Ok(Box::new(SqliteBookRepository::new(conn)))
}
