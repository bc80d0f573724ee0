use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{ExerciseEntry, User};
use crate::services::ExerciseLog;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct NewUserRequest {
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddExerciseRequest {
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Forms send text, JSON clients may send a number.
    #[serde(default, deserialize_with = "optional_scalar")]
    pub duration: Option<String>,

    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LogParams {
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,

    #[serde(default)]
    pub from: Option<String>,

    #[serde(default)]
    pub to: Option<String>,

    #[serde(default)]
    pub limit: Option<String>,
}

fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(
        Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
        }),
    )
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub username: String,
    pub id: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddedExerciseDto {
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub id: String,
    pub date: String,
}

impl AddedExerciseDto {
    #[must_use]
    pub fn new(user: User, entry: ExerciseEntry) -> Self {
        let date = entry.display_date();
        Self {
            username: user.username,
            description: entry.description,
            duration: entry.duration,
            id: user.id,
            date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogEntryDto {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<ExerciseEntry> for LogEntryDto {
    fn from(entry: ExerciseEntry) -> Self {
        let date = entry.display_date();
        Self {
            description: entry.description,
            duration: entry.duration,
            date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExerciseLogDto {
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntryDto>,
}

impl From<ExerciseLog> for ExerciseLogDto {
    fn from(log: ExerciseLog) -> Self {
        Self {
            count: log.count(),
            id: log.user.id,
            username: log.user.username,
            log: log.entries.into_iter().map(LogEntryDto::from).collect(),
        }
    }
}
