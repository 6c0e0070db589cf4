use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_PAGE_SIZE: u64 = 200;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default)]
    page: u64,
    #[serde(default = "tracker_common::_default_page_size")]
    size: u64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: tracker_common::_default_page_size(),
        }
    }
}

impl PageQuery {
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// (page, size): page is 1-based, 0 is read as 1; size is capped.
    pub fn init(&self) -> (u64, u64) {
        let size = match self.size {
            0 => tracker_common::_default_page_size(),
            s => s.min(MAX_PAGE_SIZE),
        };
        (self.page.max(1), size)
    }
}
