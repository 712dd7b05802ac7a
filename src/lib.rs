pub mod config;
pub mod controllers;
pub mod errors;
pub mod export;
pub mod generator;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;
