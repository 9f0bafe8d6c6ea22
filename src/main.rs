pub mod books;
pub mod catalog;
pub mod core;
pub mod utils;

use std::net::SocketAddr;
use axum::{
    routing::{get, post},
    Router,
};
use crate::catalog::controller::{add_book, find_book_by_id, find_books, remove_book, update_book};
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::sqlite::setup_tracing;

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let (config, store) = if DEV_MODE {
        (Configuration::new(":memory:"), RepositoryStore::InMemorySqlite)
    } else {
        (Configuration::new("books.db"), RepositoryStore::Sqlite)
    };
    let catalog_service = catalog::factory::create_catalog_service(&config, store).await?;
    let state = AppState::new(catalog_service);

    let app = Router::new()
        .route("/books", post(add_book).get(find_books))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("catalog service listening on {}", addr);
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
