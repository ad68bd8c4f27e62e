use argon2::{password_hash::{rand_core::OsRng, SaltString}, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use secrecy::{ExposeSecret, SecretString};

// Function to compute password hash
pub fn compute_password_hash(password: SecretString) -> Result<SecretString, anyhow::Error>{
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
                            .hash_password(password.expose_secret().as_bytes(), &salt)
                            .map_err(|_| anyhow::anyhow!("Failed to compute password hash"))?
                            .to_string();

    Ok(SecretString::from(password_hash))
}

// Function to verify if password matches the stored hash. Blocking; callers
// run it through spawn_blocking_with_tracing.
pub fn verify_password_hash(password: &SecretString, stored_hash: &str) -> Result<bool, anyhow::Error>{
    let parsed_hash = PasswordHash::try_from(stored_hash)
        .map_err(|_| anyhow::anyhow!("Failed to parse PasswordHash from stored hashed password"))?;

    Ok(Argon2::default()
        .verify_password(password.expose_secret().as_bytes(), &parsed_hash)
        .is_ok())
}
