pub mod exercise;
pub mod user;

pub use exercise::ExerciseEntry;
pub use user::{User, UserDocument};
