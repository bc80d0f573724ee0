mod init;
mod log;
mod users;

pub use init::cmd_init;
pub use log::cmd_log;
pub use users::cmd_list_users;
