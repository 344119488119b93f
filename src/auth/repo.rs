use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub terms_accepted: bool,
    pub created_at: OffsetDateTime,
}

/// Persistence seam for users. Handlers go through this so tests can run
/// against an in-memory store.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        terms_accepted: bool,
    ) -> anyhow::Result<User>;
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, terms_accepted, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        terms_accepted: bool,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, terms_accepted)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, terms_accepted, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(terms_accepted)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_json_never_contains_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$fake".into(),
            terms_accepted: true,
            created_at: time::macros::datetime!(2024-05-01 12:00 UTC),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }
}
