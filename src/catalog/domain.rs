pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookFilter;
use crate::books::dto::BookDto;
use crate::core::catalog::{CatalogResult, PaginatedResult};

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> CatalogResult<BookDto>;
    async fn remove_book(&self, book: &BookDto) -> CatalogResult<()>;
    async fn update_book(&self, book: &BookDto) -> CatalogResult<BookDto>;
    async fn find_book_by_id(&self, id: i64) -> CatalogResult<Option<BookDto>>;
    async fn find_books(&self, filter: &BookFilter,
                        page: usize, page_size: usize) -> CatalogResult<PaginatedResult<BookDto>>;
}
