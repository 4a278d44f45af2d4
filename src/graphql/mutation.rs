use async_graphql::{Context, Object, Result, ID};

use crate::db::Database;
use crate::models::{Client, Project, ProjectStatus};

use super::parse_id;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a client; all three contact fields are required.
    async fn add_client(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        phone: String,
    ) -> Result<Client> {
        let db = ctx.data_unchecked::<Database>();
        Ok(db.create_client(&name, &email, &phone).await?)
    }

    /// Remove a client. Returns the removed client, or null when the id
    /// matched nothing. Projects keep their reference either way.
    async fn delete_client(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Client>> {
        let db = ctx.data_unchecked::<Database>();
        Ok(db.delete_client(parse_id(&id)?).await?)
    }

    /// Create a project attached to a client by id. The referenced
    /// client is not checked for existence.
    async fn add_project(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
        #[graphql(default_with = "ProjectStatus::NotStarted")] status: ProjectStatus,
        client_id: ID,
    ) -> Result<Project> {
        let db = ctx.data_unchecked::<Database>();
        Ok(db
            .create_project(&name, &description, status.as_str(), parse_id(&client_id)?)
            .await?)
    }

    /// Remove a project. Returns the removed project, or null when the
    /// id matched nothing.
    async fn delete_project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Project>> {
        let db = ctx.data_unchecked::<Database>();
        Ok(db.delete_project(parse_id(&id)?).await?)
    }

    /// Partial update: only the provided arguments change. A nonexistent
    /// id is a silent no-op returning null.
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        description: Option<String>,
        status: Option<ProjectStatus>,
    ) -> Result<Option<Project>> {
        let db = ctx.data_unchecked::<Database>();
        Ok(db
            .update_project(
                parse_id(&id)?,
                name.as_deref(),
                description.as_deref(),
                status.map(|s| s.as_str()),
            )
            .await?)
    }
}
