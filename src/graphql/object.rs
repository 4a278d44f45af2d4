use async_graphql::{Context, Object, Result, ID};

use crate::db::Database;
use crate::models::{Client, Project};

#[Object]
impl Client {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn email(&self) -> &str {
        &self.email
    }

    async fn phone(&self) -> &str {
        &self.phone
    }
}

#[Object]
impl Project {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn description(&self) -> &str {
        &self.description
    }

    async fn status(&self) -> &str {
        &self.status
    }

    /// Looks up the owning client on demand; null when the reference
    /// points at a client that no longer exists.
    async fn client(&self, ctx: &Context<'_>) -> Result<Option<Client>> {
        let db = ctx.data_unchecked::<Database>();
        Ok(db.get_client(self.client_id).await?)
    }
}
