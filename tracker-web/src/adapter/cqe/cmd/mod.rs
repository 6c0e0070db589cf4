pub mod asset;
pub mod bulk;
pub mod field;
pub mod maintenance;
pub mod user;
