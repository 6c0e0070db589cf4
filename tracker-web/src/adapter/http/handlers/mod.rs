mod asset_handler;
mod bulk_handler;
mod dashboard_handler;
mod doc_handler;
mod field_handler;
mod maintenance_handler;
mod user_handler;

pub use asset_handler::*;
pub use bulk_handler::*;
pub use dashboard_handler::*;
pub use doc_handler::*;
pub use field_handler::*;
pub use maintenance_handler::*;
pub use user_handler::*;
