pub mod sqlite_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::catalog::CatalogResult;
use crate::core::repository::Repository;


#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // exact-match existence check backing the isbn uniqueness rule; this is
    // not a search, so no case folding and no substring matching
    async fn exists_by_isbn(&self, isbn: &str) -> CatalogResult<bool>;
}
