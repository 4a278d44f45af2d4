use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;

use crate::db::Database;
use crate::graphql::schema::{build_schema, AppSchema};

mod clients_test;

/// Build a schema backed by a fresh in-memory store. A single connection
/// keeps every query on the same database.
pub async fn create_schema() -> AppSchema {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!().run(&pool).await.unwrap();

    build_schema(Database::from_pool(pool))
}

pub async fn run_graphql_query(schema: &AppSchema, query: &str) -> Value {
    let res = schema.execute(query).await;

    assert!(res.errors.is_empty(), "GraphQL query returned errors: {:?}", res.errors);
    serde_json::to_value(res.data).expect("Failed to serialize GraphQL response")
}
