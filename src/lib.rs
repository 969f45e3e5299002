pub mod config;
pub mod error;
pub mod models;
pub mod request_id;
pub mod services;
pub mod view;
