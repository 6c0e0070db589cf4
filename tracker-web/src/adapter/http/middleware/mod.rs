pub mod auth;
pub mod request_id;
pub mod server_time;
