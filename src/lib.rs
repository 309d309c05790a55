pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod notify;
pub mod routes;
pub mod services;
pub mod state;
