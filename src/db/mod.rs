use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::Config;
use crate::models::{Client, Project};

/// Database connection pool
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(config.database_url())?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self::from_pool(pool))
    }

    /// Wrap an already-connected pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    // Client operations
    pub async fn get_clients(&self) -> Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients")
            .fetch_all(self.get_pool())
            .await?;

        Ok(clients)
    }

    pub async fn get_client(&self, id: i64) -> Result<Option<Client>> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.get_pool())
            .await?;

        Ok(client)
    }

    pub async fn create_client(&self, name: &str, email: &str, phone: &str) -> Result<Client> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO clients (name, email, phone)
            VALUES (?1, ?2, ?3)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .fetch_one(self.get_pool())
        .await?;

        Ok(Client {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        })
    }

    /// Remove a client and return the removed row, or None if no row
    /// matched. Projects referencing the client are left untouched.
    pub async fn delete_client(&self, id: i64) -> Result<Option<Client>> {
        let client = self.get_client(id).await?;

        if client.is_some() {
            sqlx::query("DELETE FROM clients WHERE id = ?1")
                .bind(id)
                .execute(self.get_pool())
                .await?;
        }

        Ok(client)
    }

    // Project operations
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>("SELECT * FROM projects")
            .fetch_all(self.get_pool())
            .await?;

        Ok(projects)
    }

    pub async fn get_project(&self, id: i64) -> Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.get_pool())
            .await?;

        Ok(project)
    }

    pub async fn create_project(
        &self,
        name: &str,
        description: &str,
        status: &str,
        client_id: i64,
    ) -> Result<Project> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO projects (name, description, status, client_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(status)
        .bind(client_id)
        .fetch_one(self.get_pool())
        .await?;

        Ok(Project {
            id,
            client_id,
            name: name.to_string(),
            description: description.to_string(),
            status: status.to_string(),
        })
    }

    pub async fn delete_project(&self, id: i64) -> Result<Option<Project>> {
        let project = self.get_project(id).await?;

        if project.is_some() {
            sqlx::query("DELETE FROM projects WHERE id = ?1")
                .bind(id)
                .execute(self.get_pool())
                .await?;
        }

        Ok(project)
    }

    /// Partial update: None arguments leave the column as it is. A
    /// nonexistent id updates nothing and returns None.
    pub async fn update_project(
        &self,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
        status: Option<&str>,
    ) -> Result<Option<Project>> {
        sqlx::query(
            r#"
            UPDATE projects
            SET name = COALESCE(?1, name),
                description = COALESCE(?2, description),
                status = COALESCE(?3, status)
            WHERE id = ?4
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(status)
        .bind(id)
        .execute(self.get_pool())
        .await?;

        self.get_project(id).await
    }
}

/// Open the database and bring the schema up to date
pub async fn init(config: &Config) -> Result<Database> {
    let db = Database::new(config).await?;

    sqlx::migrate!().run(db.get_pool()).await?;

    Ok(db)
}
