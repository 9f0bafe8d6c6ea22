use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity is the persisted form of a catalog book. The id is assigned by
// the store on first insert and stays None until then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub book_id: Option<i64>,
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            book_id: None,
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> Option<i64> {
        self.book_id
    }
}

// BookFilter is a sparse example template for catalog searches; populated
// fields constrain the match, unset fields do not.
#[derive(Debug, Clone)]
pub(crate) struct BookFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
}

impl BookFilter {
    pub fn to_predicate(&self) -> HashMap<String, String> {
        let mut predicate = HashMap::new();
        if let Some(title) = &self.title {
            predicate.insert("title".to_string(), title.to_string());
        }
        if let Some(author) = &self.author {
            predicate.insert("author".to_string(), author.to_string());
        }
        if let Some(isbn) = &self.isbn {
            predicate.insert("isbn".to_string(), isbn.to_string());
        }
        predicate
    }
}
