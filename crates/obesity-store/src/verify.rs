//! SHA256 verification of model artifacts.

use sha2::{Digest, Sha256};

use crate::error::{Result, StoreError};

/// Computes the SHA256 hash of the given data as lowercase hex.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Verifies that `data` matches `expected_digest`.
///
/// Accepts `sha256:<hex>` and plain hex, in any case. Returns the verified hash.
pub fn verify_sha256(data: &[u8], expected_digest: &str) -> Result<String> {
    let expected = expected_digest
        .trim()
        .strip_prefix("sha256:")
        .unwrap_or(expected_digest.trim())
        .to_lowercase();
    if expected.len() != 64 || !expected.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(StoreError::InvalidDigest(expected_digest.to_string()));
    }

    let actual = sha256_hex(data);
    if actual != expected {
        return Err(StoreError::ChecksumMismatch { expected, actual });
    }

    tracing::debug!("sha256 verification passed: {}", actual);
    Ok(actual)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_SHA256: &str = "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f";

    #[test]
    fn accepts_plain_prefixed_and_uppercase_digests() {
        let data = b"Hello, World!";
        assert_eq!(verify_sha256(data, HELLO_SHA256).unwrap(), HELLO_SHA256);
        assert!(verify_sha256(data, &format!("sha256:{HELLO_SHA256}")).is_ok());
        assert!(verify_sha256(data, &HELLO_SHA256.to_uppercase()).is_ok());
    }

    #[test]
    fn mismatch_reports_both_hashes() {
        let err = verify_sha256(b"Hello, World?", HELLO_SHA256).unwrap_err();
        match err {
            StoreError::ChecksumMismatch { expected, actual } => {
                assert_eq!(expected, HELLO_SHA256);
                assert_ne!(actual, HELLO_SHA256);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_digest_is_rejected() {
        assert!(matches!(
            verify_sha256(b"data", "abc123"),
            Err(StoreError::InvalidDigest(_))
        ));
        assert!(matches!(
            verify_sha256(b"data", &"g".repeat(64)),
            Err(StoreError::InvalidDigest(_))
        ));
    }
}
