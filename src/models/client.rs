#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}
