use async_graphql::{EmptySubscription, Schema};

use crate::db::Database;

use super::mutation::MutationRoot;
use super::query::QueryRoot;

/// The complete GraphQL schema type
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the database handle injected as context data
pub fn build_schema(db: Database) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .finish()
}
