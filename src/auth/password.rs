use argon2::{
    Argon2,
    password_hash::{self, PasswordHasher, SaltString, rand_core::OsRng},
};

/// Hash a new user's password with a fresh salt (argon2id, default params).
/// Only the PHC string is ever stored.
pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}
