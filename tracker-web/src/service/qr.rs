//! QR payload: `asset:<tenant id>:<asset id>`

use crate::error::AppError;

const PAYLOAD_PREFIX: &str = "asset";

pub fn encode_payload(tenant_id: &str, asset_id: &str) -> String {
    format!("{}:{}:{}", PAYLOAD_PREFIX, tenant_id, asset_id)
}

/// Resolve a scanned payload to an asset id of `tenant_id`.
pub fn decode_payload(tenant_id: &str, payload: &str) -> Result<String, AppError> {
    let mut parts = payload.trim().splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(PAYLOAD_PREFIX), Some(tenant), Some(asset))
            if !tenant.is_empty() && !asset.is_empty() =>
        {
            if tenant != tenant_id {
                return Err(AppError::MsgError(
                    "asset belongs to another organization".to_string(),
                ));
            }
            Ok(asset.to_string())
        }
        _ => Err(AppError::MsgError("unrecognized qr payload".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_round() {
        let payload = encode_payload("t1", "a-1");
        assert_eq!(payload, "asset:t1:a-1");
        assert_eq!(decode_payload("t1", &payload).unwrap(), "a-1");
        assert_eq!(decode_payload("t1", "  asset:t1:a-1\n").unwrap(), "a-1");
    }

    #[test]
    fn test_payload_rejects() {
        assert!(decode_payload("t2", "asset:t1:a-1").is_err());
        assert!(decode_payload("t1", "asset:t1:").is_err());
        assert!(decode_payload("t1", "https://example.com/a-1").is_err());
        assert!(decode_payload("t1", "").is_err());
    }
}
