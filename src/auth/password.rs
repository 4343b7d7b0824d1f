//! Salted one-way password hashing. Stored credentials are argon2-encoded
//! strings carrying their own salt.

use argon2::Config;
use rand::Rng;

pub fn hash_password(password: &str) -> Result<String, argon2::Error> {
    let salt: [u8; 16] = rand::thread_rng().gen();
    argon2::hash_encoded(password.as_bytes(), &salt, &Config::default())
}

pub fn verify_password(hash: &str, password: &str) -> bool {
    argon2::verify_encoded(hash, password.as_bytes()).unwrap_or(false)
}
