use crate::database::client::Db;
use crate::interfaces::doc_collection::{DocCollection, DocFilter, ReadOptions};
use crate::middleware::error::{AppError, AppResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::{marker::PhantomData, string::String};
use surrealdb::engine::any::Any;
use surrealdb::method::Query;
use tracing::{debug, info};

pub trait ViewFieldSelector {
    // select query fields to fill the entity, the record key is exposed as `id`
    fn get_select_query_fields() -> String;
}

/// A document type that can live in a [`SurrealCollection`].
pub trait DocEntity: ViewFieldSelector + DeserializeOwned + Send + Sync + 'static {
    type Fields: Serialize + Send + Sync + 'static;

    fn define_table_query(table_name: &str) -> String;
}

#[derive(Debug)]
pub struct SurrealCollection<E> {
    pub client: Arc<Db>,
    pub table_name: String,
    _phantom: PhantomData<E>,
}

impl<E> Clone for SurrealCollection<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            table_name: self.table_name.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<E: DocEntity> SurrealCollection<E> {
    pub fn new(client: Arc<Db>, table_name: String) -> Self {
        SurrealCollection {
            client,
            table_name,
            _phantom: PhantomData,
        }
    }

    pub async fn mutate_db(&self) -> AppResult<()> {
        if !is_valid_table_name(&self.table_name) {
            return Err(AppError::Generic {
                description: format!("invalid collection name '{}'", self.table_name),
            });
        }
        let sql = E::define_table_query(&self.table_name);
        self.client.query(sql).await?.check()?;
        info!("->> collection {} migrated", self.table_name);
        Ok(())
    }

    fn bound_query(&self, query: String, bindings: HashMap<String, String>) -> Query<'_, Any> {
        bindings
            .into_iter()
            .fold(self.client.query(query), |qry, n_val| qry.bind(n_val))
            .bind(("_table", self.table_name.clone()))
    }
}

#[async_trait]
impl<E: DocEntity> DocCollection for SurrealCollection<E> {
    type Doc = E;
    type NewDoc = E::Fields;

    async fn create_one(&self, fields: Self::NewDoc) -> AppResult<String> {
        let mut res = self
            .client
            .query("LET $key = rand::ulid();")
            .query("CREATE type::thing($_table, $key) CONTENT $doc;")
            .query("RETURN $key;")
            .bind(("_table", self.table_name.clone()))
            .bind(("doc", fields))
            .await?
            .check()?;

        let id = res.take::<Option<String>>(res.num_statements() - 1)?;
        id.ok_or(AppError::SurrealDbNoResult {
            source: format!("create in {}", self.table_name),
            id: String::new(),
        })
    }

    async fn read_one(&self, filter: &DocFilter) -> AppResult<Option<Self::Doc>> {
        let mut bindings = HashMap::new();
        let where_clause = filter_clause(filter, &mut bindings);
        let query = format!(
            "SELECT {} FROM type::table($_table) WHERE {where_clause} LIMIT 1;",
            E::get_select_query_fields()
        );
        debug!("read_one {} {query}", self.table_name);
        let mut res = self.bound_query(query, bindings).await?;
        let doc: Option<E> = res.take(0)?;
        Ok(doc)
    }

    async fn read_many(
        &self,
        filter: &DocFilter,
        options: ReadOptions,
    ) -> AppResult<Vec<Self::Doc>> {
        let mut bindings = HashMap::new();
        let where_clause = filter_clause(filter, &mut bindings);
        let order_q = if options.sort.is_empty() {
            String::new()
        } else {
            let fields = options
                .sort
                .iter()
                .map(|(field, dir)| format!("{field} {dir}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!(" ORDER BY {fields}")
        };
        let query = format!(
            "SELECT {} FROM type::table($_table) WHERE {where_clause}{order_q};",
            E::get_select_query_fields()
        );
        debug!("read_many {} {query}", self.table_name);
        let mut res = self.bound_query(query, bindings).await?;
        let docs: Vec<E> = res.take(0)?;
        Ok(docs)
    }

    async fn delete_one(&self, filter: &DocFilter) -> AppResult<bool> {
        let mut bindings = HashMap::new();
        let where_clause = filter_clause(filter, &mut bindings);
        let query = format!(
            "LET $rec = \
            (SELECT VALUE id FROM type::table($_table) WHERE {where_clause} LIMIT 1)[0]; \
            IF $rec THEN DELETE $rec END; \
            RETURN $rec != NONE;"
        );
        let mut res = self.bound_query(query, bindings).await?.check()?;
        let deleted = res
            .take::<Option<bool>>(res.num_statements() - 1)?
            .unwrap_or(false);
        debug!("delete_one {} deleted={deleted}", self.table_name);
        Ok(deleted)
    }
}

fn is_valid_table_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Renders the filter as a WHERE condition. Values go to `bindings` as `$f_<n>`.
fn filter_clause(filter: &DocFilter, bindings: &mut HashMap<String, String>) -> String {
    match filter {
        DocFilter::All => "true".to_string(),
        DocFilter::Id(id) => {
            let name = next_binding(bindings, id);
            // string comparison, never parses the value into a record id
            format!("record::id(id)=${name}")
        }
        DocFilter::Field { column, val } => {
            let name = next_binding(bindings, val);
            format!("{column}=${name}")
        }
        DocFilter::And(filters) if filters.is_empty() => "true".to_string(),
        DocFilter::And(filters) => filters
            .iter()
            .map(|f| filter_clause(f, bindings))
            .collect::<Vec<_>>()
            .join(" AND "),
    }
}

fn next_binding(bindings: &mut HashMap<String, String>, val: &str) -> String {
    let name = format!("f_{}", bindings.len());
    bindings.insert(name.clone(), val.to_string());
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_everything() {
        let mut bindings = HashMap::new();
        assert_eq!(filter_clause(&DocFilter::All, &mut bindings), "true");
        assert!(bindings.is_empty());
    }

    #[test]
    fn values_are_bound_not_inlined() {
        let mut bindings = HashMap::new();
        let filter = DocFilter::And(vec![
            DocFilter::id("01J9ZK"),
            DocFilter::field("author", "u1' OR true"),
        ]);
        let clause = filter_clause(&filter, &mut bindings);

        assert_eq!(clause, "record::id(id)=$f_0 AND author=$f_1");
        assert_eq!(bindings.get("f_0").map(String::as_str), Some("01J9ZK"));
        assert_eq!(bindings.get("f_1").map(String::as_str), Some("u1' OR true"));
    }

    #[test]
    fn same_column_twice_gets_distinct_bindings() {
        let mut bindings = HashMap::new();
        let filter = DocFilter::And(vec![
            DocFilter::field("post", "p1"),
            DocFilter::field("post", "p2"),
        ]);
        assert_eq!(filter_clause(&filter, &mut bindings), "post=$f_0 AND post=$f_1");
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn table_names_are_plain_identifiers() {
        assert!(is_valid_table_name("likes"));
        assert!(is_valid_table_name("post_likes_2"));
        assert!(!is_valid_table_name(""));
        assert!(!is_valid_table_name("likes; REMOVE TABLE user"));
    }
}
