use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::validate_book_fields;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    // taken from the request path, not the body
    #[serde(default)]
    pub book_id: i64,
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i64, isbn: &str, title: &str, author: &str) -> Self {
        Self {
            book_id,
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }
    pub fn apply_to(&self, book: &BookDto) -> BookDto {
        let mut updated = book.clone();
        updated.isbn = self.isbn.to_string();
        updated.title = self.title.to_string();
        updated.author = self.author.to_string();
        updated
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let errors = validate_book_fields(req.isbn.as_str(), req.title.as_str(), req.author.as_str());
        if !errors.is_empty() {
            return Err(CommandError::Validation { message: errors.join("; "), reason_code: None });
        }
        let existing = self.catalog_service.find_book_by_id(req.book_id).await
            .map_err(CommandError::from)?
            .ok_or_else(|| CommandError::NotFound {
                message: format!("book not found for {}", req.book_id),
            })?;
        self.catalog_service.update_book(&req.apply_to(&existing)).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
