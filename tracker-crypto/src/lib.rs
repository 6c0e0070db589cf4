use std::io::Read;

mod argon;

pub use argon::Argon;

pub trait Crypto: SingerCrypto + VerifyCrypto {}

pub trait SingerCrypto {
    fn sign(&self, data: &mut dyn Read) -> anyhow::Result<String>;
}

pub trait VerifyCrypto {
    fn verify(&self, sig: &[u8], data: &mut dyn Read) -> anyhow::Result<bool>;
}

/// Hash a login password into a PHC string.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    Argon.sign(&mut password.as_bytes())
}

/// Check a login password against a stored PHC string.
pub fn verify_password(stored: &str, password: &str) -> anyhow::Result<bool> {
    Argon.verify(stored.as_bytes(), &mut password.as_bytes())
}
