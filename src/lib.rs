pub mod config;
pub mod database;
pub mod entities;
pub mod interfaces;
pub mod middleware;
pub mod services;
