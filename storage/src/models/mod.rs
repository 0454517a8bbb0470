mod category;
mod exercise;
mod workout_record;

pub use category::Category;
pub use exercise::Exercise;
pub use workout_record::WorkoutRecord;
