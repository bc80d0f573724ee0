//! List users command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_users(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let users = store.list_users().await?;

    if users.is_empty() {
        println!("No users registered yet.");
        return Ok(());
    }

    println!("Users ({} total)", users.len());
    println!("{:-<40}", "");

    for user in users {
        println!("{:<8} {}", user.id, user.username);
    }

    Ok(())
}
