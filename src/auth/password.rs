//! Password hashing for stored user secrets.
//!
//! bcrypt with the default work factor; the salt is embedded in the produced
//! hash, so two hashes of the same input differ.

use bcrypt::DEFAULT_COST;

#[derive(Debug)]
pub enum HashError {
    Hashing(String),
}

impl std::fmt::Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashError::Hashing(msg) => write!(f, "Password hashing error: {}", msg),
        }
    }
}

impl std::error::Error for HashError {}

/// One-way hash of a secret for storage. Never reversible.
pub fn hash(secret: &str) -> Result<String, HashError> {
    bcrypt::hash(secret, DEFAULT_COST).map_err(|e| HashError::Hashing(e.to_string()))
}

/// Check a candidate secret against a stored hash.
pub fn verify(secret: &str, hashed: &str) -> Result<bool, HashError> {
    bcrypt::verify(secret, hashed).map_err(|e| HashError::Hashing(e.to_string()))
}
