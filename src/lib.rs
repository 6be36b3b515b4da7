pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod mock_data;
pub mod models;
pub mod reviews;
pub mod state;
pub mod store;
pub mod validation;
pub mod web;
