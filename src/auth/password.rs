use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    Ok(argon2
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

pub fn verify_password(password: &str, hashed: &str) -> Result<(), argon2::password_hash::Error> {
    let argon2 = Argon2::default();
    let parsed = PasswordHash::new(hashed)?;

    argon2.verify_password(password.as_bytes(), &parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hashed = hash_password("admin").unwrap();
        assert!(verify_password("admin", &hashed).is_ok());
    }

    #[test]
    fn wrong_password_rejected() {
        let hashed = hash_password("admin").unwrap();
        assert!(verify_password("guest", &hashed).is_err());
    }

    #[test]
    fn garbage_hash_rejected() {
        assert!(verify_password("admin", "not-a-phc-string").is_err());
    }
}
