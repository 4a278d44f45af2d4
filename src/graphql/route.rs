use async_graphql::http::GraphiQLSource;
use async_graphql::Request;
use async_graphql_warp::graphql;
use warp::{Filter, Rejection, Reply};

use super::schema::AppSchema;

/// Warp filter serving `/graphql`. Queries and mutations execute against
/// the schema; the GraphiQL console answers plain GETs only when
/// `graphiql` is set (development configuration).
pub fn graphql_filter(
    schema: AppSchema,
    graphiql: bool,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let graphql_post = warp::path("graphql").and(graphql(schema)).and_then(
        move |(schema, request): (AppSchema, Request)| async move {
            // Execute query
            let response = schema.execute(request).await;
            // Return result
            Ok::<_, Rejection>(warp::reply::json(&response))
        },
    );

    let graphiql_filter = warp::path("graphql").and(warp::get()).and_then(move || async move {
        if graphiql {
            Ok(warp::reply::html(
                GraphiQLSource::build().endpoint("/graphql").finish(),
            ))
        } else {
            Err(warp::reject::not_found())
        }
    });

    graphql_post.or(graphiql_filter)
}
