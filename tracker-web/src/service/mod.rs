//! business flows shared by the http handlers

pub mod asset;
pub mod bulk;
pub mod dashboard;
pub mod field;
pub mod maintenance;
pub mod qr;
pub mod user;
