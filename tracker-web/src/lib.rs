pub mod adapter;
pub mod cmd;
pub mod common;
pub mod config;
pub mod error;
pub mod repo;
pub mod service;
pub mod util;

pub use config::AppState;
