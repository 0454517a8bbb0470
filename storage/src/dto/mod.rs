pub mod exercise;
pub mod record;
