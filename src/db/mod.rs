pub mod database_service;
pub mod token;
pub mod user;
