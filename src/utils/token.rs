use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

pub const TOKEN_PREFIX: &str = "tok_";

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// 32 random bytes, URL-safe base64, `tok_` prefixed.
pub fn new_token() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("{TOKEN_PREFIX}{}", URL_SAFE_NO_PAD.encode(buf))
}
