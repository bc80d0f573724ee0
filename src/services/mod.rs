pub mod log_query;
pub use log_query::LogQuery;

pub mod user_service;
pub mod user_service_impl;
pub use user_service::{UserError, UserService};
pub use user_service_impl::SeaOrmUserService;

pub mod exercise_service;
pub mod exercise_service_impl;
pub use exercise_service::{ExerciseError, ExerciseInput, ExerciseLog, ExerciseService};
pub use exercise_service_impl::SeaOrmExerciseService;
