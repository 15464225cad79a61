#[allow(unused)]
#[derive(Debug, Clone)]
pub struct UserEntity {
    pub id: String,
    pub username: String,
    pub hash_password: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
