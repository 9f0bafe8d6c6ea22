use std::cmp;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, params_from_iter, Row};
use tokio_rusqlite::Connection;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::catalog::{CatalogError, CatalogResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::sqlite::{parse_date_text, string_date};

// columns a query predicate may reference
const FILTER_COLUMNS: [&str; 3] = ["title", "author", "isbn"];

const BOOK_COLUMNS: &str = "book_id, isbn, title, author, created_at, updated_at";

pub struct SqliteBookRepository {
    conn: Connection,
}

impl SqliteBookRepository {
    pub(crate) fn new(conn: Connection) -> Self {
        Self {
            conn,
        }
    }

    async fn insert(&self, entity: &BookEntity) -> CatalogResult<BookEntity> {
        let book = entity.clone();
        self.conn.call(move |conn| {
            conn.execute(
                "INSERT INTO books (isbn, title, author, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    book.isbn,
                    book.title,
                    book.author,
                    string_date(book.created_at),
                    string_date(book.updated_at),
                ],
            )?;
            let id = conn.last_insert_rowid();
            let mut stmt = conn.prepare(
                format!("SELECT {} FROM books WHERE book_id = ?1", BOOK_COLUMNS).as_str())?;
            stmt.query_row(params![id], map_book_row)
        }).await.map_err(CatalogError::from)
    }

    async fn update_row(&self, id: i64, entity: &BookEntity) -> CatalogResult<BookEntity> {
        let book = entity.clone();
        let updated = self.conn.call(move |conn| {
            let changed = conn.execute(
                "UPDATE books SET isbn = ?1, title = ?2, author = ?3, updated_at = ?4
                 WHERE book_id = ?5",
                params![
                    book.isbn,
                    book.title,
                    book.author,
                    string_date(Utc::now().naive_utc()),
                    id,
                ],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            let mut stmt = conn.prepare(
                format!("SELECT {} FROM books WHERE book_id = ?1", BOOK_COLUMNS).as_str())?;
            stmt.query_row(params![id], map_book_row).map(Some)
        }).await.map_err(CatalogError::from)?;
        updated.ok_or_else(|| CatalogError::not_found(
            format!("book not found for {}", id).as_str()))
    }
}

#[async_trait]
impl Repository<BookEntity> for SqliteBookRepository {
    async fn save(&self, entity: &BookEntity) -> CatalogResult<BookEntity> {
        match entity.book_id {
            None => self.insert(entity).await,
            Some(id) => self.update_row(id, entity).await,
        }
    }

    async fn get(&self, id: i64) -> CatalogResult<Option<BookEntity>> {
        self.conn.call(move |conn| {
            let mut stmt = conn.prepare(
                format!("SELECT {} FROM books WHERE book_id = ?1", BOOK_COLUMNS).as_str())?;
            match stmt.query_row(params![id], map_book_row) {
                Ok(book) => Ok(Some(book)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(err),
            }
        }).await.map_err(CatalogError::from)
    }

    async fn delete(&self, id: i64) -> CatalogResult<usize> {
        let deleted = self.conn.call(move |conn| {
            conn.execute("DELETE FROM books WHERE book_id = ?1", params![id])
        }).await.map_err(CatalogError::from)?;
        if deleted == 0 {
            return Err(CatalogError::not_found(format!("book not found for {}", id).as_str()));
        }
        Ok(deleted)
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: usize, page_size: usize) -> CatalogResult<PaginatedResult<BookEntity>> {
        let mut clauses = Vec::new();
        let mut args = Vec::new();
        for (column, value) in predicate {
            if !FILTER_COLUMNS.contains(&column.as_str()) {
                return Err(CatalogError::validation(
                    format!("unknown filter column {}", column).as_str(), None));
            }
            clauses.push(format!("LOWER({}) LIKE '%' || LOWER(?{}) || '%'",
                                 column, args.len() + 1));
            args.push(value.to_string());
        }
        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };
        let size = cmp::min(page_size, 500);
        let count_sql = format!("SELECT COUNT(*) FROM books{}", where_sql);
        let select_sql = format!(
            "SELECT {} FROM books{} ORDER BY book_id ASC LIMIT {} OFFSET {}",
            BOOK_COLUMNS, where_sql, size, page * size);
        let (total, records) = self.conn.call(move |conn| {
            let total = conn.query_row(count_sql.as_str(), params_from_iter(args.iter()),
                                       |row| row.get::<_, i64>(0))?;
            let mut stmt = conn.prepare(select_sql.as_str())?;
            let rows = stmt.query_map(params_from_iter(args.iter()), map_book_row)?;
            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok((total, records))
        }).await.map_err(CatalogError::from)?;
        Ok(PaginatedResult::new(page, size, total as usize, records))
    }
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn exists_by_isbn(&self, isbn: &str) -> CatalogResult<bool> {
        let isbn = isbn.to_string();
        self.conn.call(move |conn| {
            conn.query_row("SELECT EXISTS (SELECT 1 FROM books WHERE isbn = ?1)",
                           params![isbn], |row| row.get::<_, bool>(0))
        }).await.map_err(CatalogError::from)
    }
}

fn map_book_row(row: &Row) -> rusqlite::Result<BookEntity> {
    Ok(BookEntity {
        book_id: Some(row.get(0)?),
        isbn: row.get(1)?,
        title: row.get(2)?,
        author: row.get(3)?,
        created_at: parse_date_text(row.get::<_, String>(4)?.as_str())
            .unwrap_or_else(|| Utc::now().naive_utc()),
        updated_at: parse_date_text(row.get::<_, String>(5)?.as_str())
            .unwrap_or_else(|| Utc::now().naive_utc()),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::sqlite_book_repository::SqliteBookRepository;
    use crate::core::catalog::CatalogError;
    use crate::core::domain::Configuration;
    use crate::core::repository::{Repository, RepositoryStore};
    use crate::utils::sqlite::{build_db_connection, create_books_table};

    async fn setup_repository() -> SqliteBookRepository {
        let conn = build_db_connection(&Configuration::new(":memory:"), RepositoryStore::InMemorySqlite)
            .await.expect("should open connection");
        create_books_table(&conn).await.expect("should create books table");
        SqliteBookRepository::new(conn)
    }

    #[tokio::test]
    async fn test_should_save_get_books() {
        let books_repo = setup_repository().await;
        let book = BookEntity::new("isbn", "test book", "test author");
        let saved = books_repo.save(&book).await.expect("should save book");
        assert!(saved.book_id.is_some());

        let loaded = books_repo.get(saved.book_id.unwrap()).await
            .expect("should return book").expect("should find book");
        assert_eq!(saved.book_id, loaded.book_id);
        assert_eq!("isbn", loaded.isbn.as_str());
        assert_eq!("test book", loaded.title.as_str());
        assert_eq!("test author", loaded.author.as_str());
    }

    #[tokio::test]
    async fn test_should_get_none_for_unknown_id() {
        let books_repo = setup_repository().await;
        let loaded = books_repo.get(1000).await.expect("should query book");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_should_save_update_books() {
        let books_repo = setup_repository().await;
        let book = BookEntity::new("isbn", "test book", "test author");
        let mut saved = books_repo.save(&book).await.expect("should save book");

        saved.title = "new title".to_string();
        saved.isbn = "new isbn".to_string();
        let updated = books_repo.save(&saved).await.expect("should update book");
        assert_eq!(saved.book_id, updated.book_id);

        let loaded = books_repo.get(saved.book_id.unwrap()).await
            .expect("should return book").expect("should find book");
        assert_eq!("new title", loaded.title.as_str());
        assert_eq!("new isbn", loaded.isbn.as_str());
        assert_eq!("test author", loaded.author.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_update_for_unknown_id() {
        let books_repo = setup_repository().await;
        let mut book = BookEntity::new("isbn", "test book", "test author");
        book.book_id = Some(999);
        let res = books_repo.save(&book).await;
        assert!(matches!(res, Err(CatalogError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_save_delete_books() {
        let books_repo = setup_repository().await;
        let book = BookEntity::new("isbn", "test book", "test author");
        let saved = books_repo.save(&book).await.expect("should save book");

        let deleted = books_repo.delete(saved.book_id.unwrap()).await.expect("should delete book");
        assert_eq!(1, deleted);

        let loaded = books_repo.get(saved.book_id.unwrap()).await.expect("should query book");
        assert!(loaded.is_none());

        let res = books_repo.delete(saved.book_id.unwrap()).await;
        assert!(matches!(res, Err(CatalogError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_check_isbn_exists() {
        let books_repo = setup_repository().await;
        let book = BookEntity::new("isbn-881", "test book", "test author");
        let _ = books_repo.save(&book).await.expect("should save book");

        assert!(books_repo.exists_by_isbn("isbn-881").await.expect("should check isbn"));
        // exact equality, no case folding and no substring matching
        assert!(!books_repo.exists_by_isbn("ISBN-881").await.expect("should check isbn"));
        assert!(!books_repo.exists_by_isbn("isbn-88").await.expect("should check isbn"));
    }

    #[tokio::test]
    async fn test_should_query_books_by_example() {
        let books_repo = setup_repository().await;
        for (isbn, title, author) in [
            ("001", "As aventuras", "Artur"),
            ("002", "Other", "Someone"),
            ("003", "Histórias", "Artur"),
        ] {
            let _ = books_repo.save(&BookEntity::new(isbn, title, author)).await
                .expect("should save book");
        }

        let res = books_repo.query(
            &HashMap::from([("title".to_string(), "AVENT".to_string())]),
            0, 10).await.expect("should query books");
        assert_eq!(1, res.records.len());
        assert_eq!(1, res.total_elements);
        assert_eq!("As aventuras", res.records[0].title.as_str());

        // populated fields combine with AND
        let res = books_repo.query(
            &HashMap::from([
                ("title".to_string(), "avent".to_string()),
                ("author".to_string(), "art".to_string()),
            ]),
            0, 10).await.expect("should query books");
        assert_eq!(1, res.records.len());

        let res = books_repo.query(
            &HashMap::from([
                ("title".to_string(), "avent".to_string()),
                ("author".to_string(), "someone".to_string()),
            ]),
            0, 10).await.expect("should query books");
        assert_eq!(0, res.records.len());
        assert_eq!(0, res.total_elements);

        // empty predicate matches everything
        let res = books_repo.query(&HashMap::new(), 0, 10).await.expect("should query books");
        assert_eq!(3, res.records.len());
        assert_eq!(3, res.total_elements);
    }

    #[tokio::test]
    async fn test_should_reject_unknown_filter_column() {
        let books_repo = setup_repository().await;
        let res = books_repo.query(
            &HashMap::from([("book_id".to_string(), "1".to_string())]), 0, 10).await;
        assert!(matches!(res, Err(CatalogError::Validation { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_paginate_query_books() {
        let books_repo = setup_repository().await;
        for i in 0..25 {
            let book = BookEntity::new(format!("isbn_{}", i).as_str(),
                                       format!("title_{}", i).as_str(), "author");
            let _ = books_repo.save(&book).await.expect("should save book");
        }

        let mut total = 0;
        for page in 0..3 {
            let res = books_repo.query(&HashMap::new(), page, 10).await
                .expect("should query books");
            assert_eq!(page, res.page);
            assert_eq!(10, res.page_size);
            assert_eq!(25, res.total_elements);
            total += res.records.len();
        }
        assert_eq!(25, total);

        let res = books_repo.query(&HashMap::new(), 3, 10).await.expect("should query books");
        assert_eq!(0, res.records.len());
        assert_eq!(25, res.total_elements);
    }
}
