use async_graphql::Enum;

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Project {
    pub id: i64,
    pub client_id: i64,
    pub name: String,
    pub description: String,
    pub status: String,
}

/// Accepted values for the `status` argument. The column itself is plain
/// text; only the argument boundary validates it.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ProjectStatus {
    #[graphql(name = "new")]
    NotStarted,
    #[graphql(name = "progress")]
    InProgress,
    #[graphql(name = "completed")]
    Completed,
}

impl ProjectStatus {
    /// The string stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "Not started",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}
