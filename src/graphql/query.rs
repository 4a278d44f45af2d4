use async_graphql::{Context, Object, Result, ID};

use crate::db::Database;
use crate::models::{Client, Project};

use super::parse_id;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All clients, in store order.
    async fn clients(&self, ctx: &Context<'_>) -> Result<Vec<Client>> {
        let db = ctx.data_unchecked::<Database>();
        Ok(db.get_clients().await?)
    }

    /// A single client, or null when no row matches the id.
    async fn client(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Client>> {
        let db = ctx.data_unchecked::<Database>();
        Ok(db.get_client(parse_id(&id)?).await?)
    }

    /// All projects, in store order.
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        let db = ctx.data_unchecked::<Database>();
        Ok(db.get_projects().await?)
    }

    /// A single project, or null when no row matches the id.
    async fn project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Project>> {
        let db = ctx.data_unchecked::<Database>();
        Ok(db.get_project(parse_id(&id)?).await?)
    }
}
