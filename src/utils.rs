use sha2::{Digest, Sha256};

/// Salted, truncated hash of a user identifier for log output.
///
/// Raw emails never appear in logs; eight hex characters are enough to
/// correlate entries for one account within a deployment.
pub fn log_safe_id(id: &str, salt: &str) -> String {
    let digest = Sha256::new_with_prefix(salt.as_bytes())
        .chain_update(id.as_bytes())
        .finalize();

    digest[..4].iter().map(|b| format!("{b:02x}")).collect()
}
