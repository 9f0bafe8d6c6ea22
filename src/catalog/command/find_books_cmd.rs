use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookFilter;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::catalog::PaginatedResult;
use crate::core::command::{Command, CommandError};

pub(crate) struct FindBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// every field is optional: an empty request lists the whole catalog on the
// first page with the default page size
#[derive(Debug, Deserialize)]
pub(crate) struct FindBooksCommandRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub page: Option<usize>,
    pub size: Option<usize>,
}

impl FindBooksCommandRequest {
    pub fn new(title: Option<&str>, author: Option<&str>, isbn: Option<&str>,
               page: Option<usize>, size: Option<usize>) -> Self {
        Self {
            title: title.map(str::to_string),
            author: author.map(str::to_string),
            isbn: isbn.map(str::to_string),
            page,
            size,
        }
    }
    pub fn build_filter(&self) -> BookFilter {
        BookFilter {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct FindBooksCommandResponse {
    pub records: Vec<BookDto>,
    pub page: usize,
    pub page_size: usize,
    pub total_elements: usize,
}

impl From<PaginatedResult<BookDto>> for FindBooksCommandResponse {
    fn from(res: PaginatedResult<BookDto>) -> Self {
        Self {
            records: res.records,
            page: res.page,
            page_size: res.page_size,
            total_elements: res.total_elements,
        }
    }
}

#[async_trait]
impl Command<FindBooksCommandRequest, FindBooksCommandResponse> for FindBooksCommand {
    async fn execute(&self, req: FindBooksCommandRequest) -> Result<FindBooksCommandResponse, CommandError> {
        let filter = req.build_filter();
        self.catalog_service.find_books(&filter, req.page.unwrap_or(0), req.size.unwrap_or(0))
            .await.map_err(CommandError::from).map(FindBooksCommandResponse::from)
    }
}
