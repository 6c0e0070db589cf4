pub const fn _default_page_size() -> u64 {
    20
}

pub const fn _default_sync_schema() -> bool {
    true
}

/// Token lifetime in seconds.
pub const fn _default_jwt_expire() -> i64 {
    60 * 60 * 24
}

#[inline]
pub fn _default_jwt_issuer() -> String {
    "asset-tracker".to_owned()
}

#[inline]
pub fn _default_listen_addr() -> String {
    "0.0.0.0".to_owned()
}
