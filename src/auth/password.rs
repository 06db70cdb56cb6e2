use rand::RngCore;
use sha2::{Digest, Sha256};

const SCHEME: &str = "sha256";
const SALT_LEN: usize = 16;

/// Hash a password as `sha256$<salt-hex>$<digest-hex>` with a fresh random
/// salt per call.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    let digest = digest_with_salt(&salt, password);
    format!("{}${}${}", SCHEME, hex::encode(salt), digest)
}

/// Check a password against a stored hash string. Malformed stored hashes
/// never match.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(scheme), Some(salt_hex), Some(digest_hex), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    if scheme != SCHEME {
        return false;
    }
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };

    digest_with_salt(&salt, password) == digest_hex
}

fn digest_with_salt(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_round_trip() {
        let hash = hash_password("hunter22");
        assert!(hash.starts_with("sha256$"));
        assert!(verify_password("hunter22", &hash));
        assert!(!verify_password("hunter23", &hash));
    }

    #[test]
    fn test_salts_are_fresh() {
        assert_ne!(hash_password("hunter22"), hash_password("hunter22"));
    }

    #[test]
    fn test_malformed_stored_hash_never_matches() {
        assert!(!verify_password("hunter22", ""));
        assert!(!verify_password("hunter22", "sha256$zz$zz"));
        assert!(!verify_password("hunter22", "md5$00$00"));
        assert!(!verify_password("hunter22", "sha256$0011$aabb$extra"));
    }
}
