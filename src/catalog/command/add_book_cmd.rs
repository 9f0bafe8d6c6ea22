use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) isbn: String,
    pub(crate) title: String,
    pub(crate) author: String,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.isbn.as_str(), self.title.as_str(), self.author.as_str())
    }
}

// all required fields are reported in one pass
pub(crate) fn validate_book_fields(isbn: &str, title: &str, author: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if title.trim().is_empty() {
        errors.push("title must not be empty".to_string());
    }
    if author.trim().is_empty() {
        errors.push("author must not be empty".to_string());
    }
    if isbn.trim().is_empty() {
        errors.push("isbn must not be empty".to_string());
    }
    errors
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let errors = validate_book_fields(req.isbn.as_str(), req.title.as_str(), req.author.as_str());
        if !errors.is_empty() {
            return Err(CommandError::Validation { message: errors.join("; "), reason_code: None });
        }
        self.catalog_service.add_book(&req.build_book()).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Arc<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::new(":memory:"), RepositoryStore::InMemorySqlite)
                    .await.expect("should create catalog service")
            });
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = AddBookCommand::new(SUT_SVC.get().await.clone());

        let res = cmd.execute(AddBookCommandRequest::new("add-001", "test book", "test author"))
            .await.expect("should add book");
        assert!(res.book.book_id.is_some());
        assert_eq!("add-001", res.book.isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_empty_fields() {
        let cmd = AddBookCommand::new(SUT_SVC.get().await.clone());

        let res = cmd.execute(AddBookCommandRequest::new("", "", "")).await;
        match res {
            Err(CommandError::Validation { message, .. }) => {
                assert!(message.contains("title must not be empty"));
                assert!(message.contains("author must not be empty"));
                assert!(message.contains("isbn must not be empty"));
            }
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_isbn() {
        let cmd = AddBookCommand::new(SUT_SVC.get().await.clone());

        let _ = cmd.execute(AddBookCommandRequest::new("add-dup-001", "test book", "test author"))
            .await.expect("should add book");
        let res = cmd.execute(AddBookCommandRequest::new("add-dup-001", "other book", "other author")).await;
        assert!(matches!(res, Err(CommandError::DuplicateIsbn { message: _ })));
    }
}
