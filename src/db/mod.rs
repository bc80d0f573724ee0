use crate::models::{ExerciseEntry, User, UserDocument};
use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::user::CreateUserOutcome;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:").trim_start_matches("//");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    #[must_use]
    pub fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    pub async fn create_user(&self, id: &str, username: &str) -> Result<CreateUserOutcome> {
        self.user_repo().insert(id, username).await
    }

    pub async fn get_user(&self, id: &str) -> Result<Option<UserDocument>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.user_repo().list().await
    }

    pub async fn push_exercise(&self, user_id: &str, entry: &ExerciseEntry) -> Result<bool> {
        self.user_repo().push_exercise(user_id, entry).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    async fn temp_store() -> Store {
        let path = std::env::temp_dir().join(format!("extrack-store-{}.db", uuid::Uuid::new_v4()));
        Store::new(&format!("sqlite:{}", path.display()))
            .await
            .expect("failed to open store")
    }

    fn entry(description: &str, date: (i32, u32, u32)) -> ExerciseEntry {
        ExerciseEntry {
            description: description.to_string(),
            duration: 10,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_fetch_user() {
        let store = temp_store().await;

        let outcome = store.create_user("abc12", "alice").await.unwrap();
        assert_eq!(
            outcome,
            CreateUserOutcome::Created(User {
                id: "abc12".to_string(),
                username: "alice".to_string()
            })
        );

        let doc = store.get_user("abc12").await.unwrap().unwrap();
        assert_eq!(doc.username, "alice");
        assert!(doc.exercises.is_empty());

        assert!(store.get_user("zzzzz").await.unwrap().is_none());
        assert!(store.get_user_by_username("alice").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unique_index_reports_taken_username() {
        let store = temp_store().await;

        store.create_user("id001", "bob").await.unwrap();
        let second = store.create_user("id002", "bob").await.unwrap();

        assert_eq!(second, CreateUserOutcome::UsernameTaken);
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_id_collision_is_an_error() {
        let store = temp_store().await;

        store.create_user("same1", "carol").await.unwrap();
        assert!(store.create_user("same1", "dave").await.is_err());
    }

    #[tokio::test]
    async fn test_push_exercise_preserves_append_order() {
        let store = temp_store().await;
        store.create_user("pusher", "erin").await.unwrap();

        let later = entry("later", (2021, 3, 1));
        let earlier = entry("earlier", (2021, 1, 1));
        assert!(store.push_exercise("pusher", &later).await.unwrap());
        assert!(store.push_exercise("pusher", &earlier).await.unwrap());

        let doc = store.get_user("pusher").await.unwrap().unwrap();
        assert_eq!(doc.exercises, vec![later, earlier]);
    }

    #[tokio::test]
    async fn test_push_exercise_unknown_user() {
        let store = temp_store().await;
        let pushed = store
            .push_exercise("ghost", &entry("run", (2021, 1, 1)))
            .await
            .unwrap();
        assert!(!pushed);
    }
}
