use std::cmp;
use async_trait::async_trait;
use crate::books::domain::model::{BookEntity, BookFilter};
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::catalog::{CatalogError, CatalogResult, PaginatedResult};
use crate::core::domain::{Configuration, Identifiable};

pub(crate) struct CatalogServiceImpl {
    config: Configuration,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            config: config.clone(),
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> CatalogResult<BookDto> {
        if self.book_repository.exists_by_isbn(book.isbn.as_str()).await? {
            return Err(CatalogError::duplicate_isbn(
                format!("isbn {} is already registered", book.isbn).as_str()));
        }
        self.book_repository.save(&BookEntity::from(book)).await.map(|b| BookDto::from(&b))
    }

    async fn remove_book(&self, book: &BookDto) -> CatalogResult<()> {
        match book.id() {
            Some(id) => self.book_repository.delete(id).await.map(|_| ()),
            None => Err(CatalogError::invalid_argument("book id cannot be None for remove")),
        }
    }

    async fn update_book(&self, book: &BookDto) -> CatalogResult<BookDto> {
        if book.id().is_none() {
            return Err(CatalogError::invalid_argument("book id cannot be None for update"));
        }
        // the isbn uniqueness rule applies on add only; an update may change
        // the isbn without a fresh existence check
        self.book_repository.save(&BookEntity::from(book)).await.map(|b| BookDto::from(&b))
    }

    async fn find_book_by_id(&self, id: i64) -> CatalogResult<Option<BookDto>> {
        self.book_repository.get(id).await.map(|book| book.map(|b| BookDto::from(&b)))
    }

    async fn find_books(&self, filter: &BookFilter,
                        page: usize, page_size: usize) -> CatalogResult<PaginatedResult<BookDto>> {
        let size = if page_size == 0 {
            self.config.default_page_size
        } else {
            cmp::min(page_size, self.config.max_page_size)
        };
        let res = self.book_repository.query(&filter.to_predicate(), page, size).await?;
        Ok(PaginatedResult::new(res.page, res.page_size, res.total_elements,
                                res.records.iter().map(BookDto::from).collect()))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id,
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
