use crate::middleware::error::AppResult;
use async_trait::async_trait;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Which documents an operation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocFilter {
    All,
    Id(String),
    Field { column: String, val: String },
    And(Vec<DocFilter>),
}

impl DocFilter {
    pub fn id(id: &str) -> Self {
        DocFilter::Id(id.to_string())
    }

    pub fn field(column: &str, val: &str) -> Self {
        DocFilter::Field {
            column: column.to_string(),
            val: val.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QryOrder {
    DESC,
    ASC,
}

impl fmt::Display for QryOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QryOrder::DESC => write!(f, "DESC"),
            QryOrder::ASC => write!(f, "ASC"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ReadOptions {
    // empty keeps the store's default order
    pub sort: Vec<(String, QryOrder)>,
}

impl ReadOptions {
    pub fn sort_by(mut self, field: &str, dir: QryOrder) -> Self {
        self.sort.push((field.to_string(), dir));
        self
    }
}

/// Generic persistent collection the feature modules store their documents in.
#[async_trait]
pub trait DocCollection: Send + Sync {
    type Doc: Send;
    type NewDoc: Send;

    /// Stores a new document and returns its generated id.
    async fn create_one(&self, fields: Self::NewDoc) -> AppResult<String>;
    async fn read_one(&self, filter: &DocFilter) -> AppResult<Option<Self::Doc>>;
    async fn read_many(
        &self,
        filter: &DocFilter,
        options: ReadOptions,
    ) -> AppResult<Vec<Self::Doc>>;
    /// Deletes at most one matching document. Returns whether one was removed.
    async fn delete_one(&self, filter: &DocFilter) -> AppResult<bool>;
}
