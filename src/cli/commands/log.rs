//! Exercise log command handler

use crate::config::Config;
use crate::db::Store;
use crate::services::{ExerciseError, ExerciseService, LogQuery, SeaOrmExerciseService};

pub async fn cmd_log(
    config: &Config,
    user_id: &str,
    from: Option<&str>,
    to: Option<&str>,
    limit: Option<&str>,
) -> anyhow::Result<()> {
    let query = LogQuery::parse(from, to, limit)?;

    let store = Store::new(&config.general.database_path).await?;
    let service = SeaOrmExerciseService::new(store);

    let log = match service.get_log(user_id, &query).await {
        Ok(log) => log,
        Err(ExerciseError::UserNotFound(id)) => {
            println!("Unknown user ID: {}", id);
            println!("Use 'extrack users' to see IDs");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "{} ({}) - {} entries",
        log.user.username,
        log.user.id,
        log.count()
    );
    println!("{:-<60}", "");

    for entry in &log.entries {
        println!(
            "{}  {:>5}  {}",
            entry.display_date(),
            entry.duration,
            entry.description
        );
    }

    Ok(())
}
