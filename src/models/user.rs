use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;

use super::ExerciseEntry;
use crate::constants::ids;
use crate::entities::users;

/// A registered account, without its exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
        }
    }
}

/// A user together with the exercises embedded in its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDocument {
    pub id: String,
    pub username: String,
    pub exercises: Vec<ExerciseEntry>,
}

impl UserDocument {
    #[must_use]
    pub fn user(&self) -> User {
        User {
            id: self.id.clone(),
            username: self.username.clone(),
        }
    }
}

impl TryFrom<users::Model> for UserDocument {
    type Error = anyhow::Error;

    fn try_from(model: users::Model) -> Result<Self> {
        let exercises: Vec<ExerciseEntry> = serde_json::from_str(&model.exercises)
            .with_context(|| format!("Corrupt exercise list for user {}", model.id))?;

        Ok(Self {
            id: model.id,
            username: model.username,
            exercises,
        })
    }
}

/// Generate a short random user id (5 alphanumeric characters).
///
/// Collisions are not retried; the primary key rejects them at insert time.
#[must_use]
pub fn generate_user_id() -> String {
    let mut rng = rand::rng();

    (0..ids::LENGTH)
        .map(|_| char::from(ids::ALPHABET[rng.random_range(0..ids::ALPHABET.len())]))
        .collect()
}
