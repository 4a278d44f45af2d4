pub mod mutation;
pub mod object;
pub mod query;
pub mod route;
pub mod schema;

use async_graphql::ID;

/// Errors raised at the GraphQL argument boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid id `{0}`")]
    InvalidId(String),
}

/// Identifiers travel as GraphQL `ID` strings; the store keys rows by
/// integer. A string that does not parse is an execution error, not a
/// missing row.
pub(crate) fn parse_id(id: &ID) -> Result<i64, ApiError> {
    id.parse::<i64>()
        .map_err(|_| ApiError::InvalidId(id.to_string()))
}
