use crate::{Crypto, SingerCrypto, VerifyCrypto};
use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use std::io::Read;

#[derive(Default)]
pub struct Argon;

impl Crypto for Argon {}

impl SingerCrypto for Argon {
    fn sign(&self, data: &mut dyn Read) -> anyhow::Result<String> {
        let mut password = Vec::new();
        data.read_to_end(&mut password)?;
        let salt = SaltString::generate(&mut OsRng);
        // Argon2id v19, default params
        let password_hash = Argon2::default()
            .hash_password(password.as_slice(), &salt)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
            .to_string();
        Ok(password_hash)
    }
}

impl VerifyCrypto for Argon {
    fn verify(&self, sig: &[u8], data: &mut dyn Read) -> anyhow::Result<bool> {
        let mut password = Vec::new();
        data.read_to_end(&mut password)?;
        let stored_hash = std::str::from_utf8(sig)?;
        let parsed_hash = PasswordHash::new(stored_hash)
            .map_err(|e| anyhow::anyhow!("invalid password hash: {}", e))?;
        Ok(Argon2::default()
            .verify_password(&password, &parsed_hash)
            .is_ok())
    }
}
