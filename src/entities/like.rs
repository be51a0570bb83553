use crate::database::doc_collection::{DocEntity, ViewFieldSelector};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user liking one post. Never updated, only created and deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub author: String,
    pub post: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewLike {
    pub author: String,
    pub post: String,
}

impl ViewFieldSelector for Like {
    fn get_select_query_fields() -> String {
        "record::id(id) AS id, author, post, created_at".to_string()
    }
}

impl DocEntity for Like {
    type Fields = NewLike;

    fn define_table_query(table_name: &str) -> String {
        // author index is not unique, the same user may like a post more than once
        format!(
            "
    DEFINE TABLE IF NOT EXISTS {table_name} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS author ON TABLE {table_name} TYPE string READONLY;
    DEFINE FIELD IF NOT EXISTS post ON TABLE {table_name} TYPE string READONLY;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {table_name} TYPE datetime
        DEFAULT time::now() READONLY;
    DEFINE INDEX IF NOT EXISTS {table_name}_author_idx ON {table_name} FIELDS author;
    "
        )
    }
}
