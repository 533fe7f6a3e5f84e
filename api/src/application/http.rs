pub mod file;
pub mod food_analysis;
pub mod server;
pub mod user;
