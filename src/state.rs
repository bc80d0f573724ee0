use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{ExerciseService, SeaOrmExerciseService, SeaOrmUserService, UserService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub user_service: Arc<dyn UserService>,

    pub exercise_service: Arc<dyn ExerciseService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let user_service =
            Arc::new(SeaOrmUserService::new(store.clone())) as Arc<dyn UserService + 'static>;

        let exercise_service = Arc::new(SeaOrmExerciseService::new(store))
            as Arc<dyn ExerciseService + 'static>;

        Self {
            config: Arc::new(config),
            user_service,
            exercise_service,
        }
    }
}
