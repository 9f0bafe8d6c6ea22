use async_trait::async_trait;
use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::core::catalog::{CatalogResult, PaginatedResult};

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // insert the entity when it has no id yet, otherwise update the row
    // matching its id; returns the persisted record including the
    // storage-assigned id
    async fn save(&self, entity: &Entity) -> CatalogResult<Entity>;

    // get an entity by its storage-assigned id; absence is a normal outcome
    async fn get(&self, id: i64) -> CatalogResult<Option<Entity>>;

    // delete the row matching the id
    async fn delete(&self, id: i64) -> CatalogResult<usize>;

    // example-based search: each predicate value is matched against its
    // column as a case-insensitive substring, entries combine with AND
    async fn query(&self, predicate: &HashMap::<String, String>,
                   page: usize, page_size: usize) -> CatalogResult<PaginatedResult<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    Sqlite,
    InMemorySqlite,
}
