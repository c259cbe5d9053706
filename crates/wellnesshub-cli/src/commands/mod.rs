pub mod admin;
pub mod blog;
pub mod breathe;
pub mod config;
pub mod dashboard;
pub mod directory;
pub mod forum;
pub mod journal;
pub mod quiz;
pub mod resources;
pub mod routes;
