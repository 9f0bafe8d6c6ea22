use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> Option<i64>;
}


// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub database_path: String,
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Configuration {
    pub fn new(database_path: &str) -> Self {
        Configuration {
            database_path: database_path.to_string(),
            default_page_size: 20,
            max_page_size: 500,
        }
    }
}
