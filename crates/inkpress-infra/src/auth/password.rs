//! Argon2 hashing for the admin password.

use argon2::{
    Algorithm, Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use inkpress_core::ports::{AuthError, PasswordService};

/// Argon2-based password service.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Check that a configured `ADMIN_PASSWORD_HASH` is an Argon2 PHC string
    /// this service can verify against.
    pub fn check_hash(&self, hash: &str) -> Result<(), AuthError> {
        let parsed =
            PasswordHash::new(hash.trim()).map_err(|e| AuthError::HashingError(e.to_string()))?;

        match Algorithm::try_from(parsed.algorithm) {
            Ok(_) if parsed.salt.is_some() && parsed.hash.is_some() => Ok(()),
            Ok(_) => Err(AuthError::HashingError(
                "hash is missing its salt or output".to_string(),
            )),
            Err(_) => Err(AuthError::HashingError(format!(
                "unsupported algorithm `{}`, expected argon2",
                parsed.algorithm
            ))),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_hash_round_trip() {
        let service = Argon2PasswordService::new();
        let password = "correct horse battery";

        let hash = service.hash(password).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(service.check_hash(&hash).is_ok());
        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("correct horse", &hash).unwrap());
    }

    #[test]
    fn test_check_hash_rejects_foreign_formats() {
        let service = Argon2PasswordService::new();

        // bcrypt output, as produced by other admin tooling
        let bcrypt = "$2b$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";
        assert!(matches!(
            service.check_hash(bcrypt),
            Err(AuthError::HashingError(_))
        ));

        let scrypt = "$scrypt$ln=16,r=8,p=1$aM15713r3Xsvxbi31lqr1Q$nFNh2CVHVjNldFVKDHDlm4CbdRSCdEBsjjJxD+iCs5E";
        assert!(matches!(
            service.check_hash(scrypt),
            Err(AuthError::HashingError(_))
        ));

        assert!(service.check_hash("plaintext-password").is_err());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let service = Argon2PasswordService::new();
        let result = service.verify("secure_password_123", "not-a-phc-string");
        assert!(matches!(result, Err(AuthError::HashingError(_))));
    }
}
