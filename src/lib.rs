pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod intake;
pub mod models;
pub mod notify;
pub mod templates_structs;
