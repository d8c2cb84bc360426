use std::sync::Arc;
use crate::config::PasswordScheme;
use crate::store::UserStore;

/// Checks a supplied password against the stored value for a user.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, supplied: &str, stored: &str) -> bool;
}

/// Stored value is the password itself.
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        supplied == stored
    }
}

/// Stored value is a bcrypt hash.
pub struct BcryptVerifier;

impl CredentialVerifier for BcryptVerifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        match bcrypt::verify(supplied, stored) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password is not a usable bcrypt hash: {}", e);
                false
            }
        }
    }
}

pub fn verifier_for(scheme: PasswordScheme) -> Arc<dyn CredentialVerifier> {
    match scheme {
        PasswordScheme::Plaintext => Arc::new(PlaintextVerifier),
        PasswordScheme::Bcrypt => Arc::new(BcryptVerifier),
    }
}

/// Resolves logins against the users file.
#[derive(Clone)]
pub struct Authenticator {
    users: Arc<UserStore>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl Authenticator {
    pub fn new(users: UserStore, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            users: Arc::new(users),
            verifier,
        }
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|user| self.verifier.verify(password, &user.password))
    }

    /// Whether a username held in a session still maps to a known user.
    pub fn is_known(&self, username: &str) -> bool {
        self.users.contains(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn authenticator(contents: &str, scheme: PasswordScheme) -> Authenticator {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.txt");
        fs::write(&path, contents).unwrap();
        Authenticator::new(UserStore::load(&path).unwrap(), verifier_for(scheme))
    }

    #[test]
    fn plaintext_login() {
        let auth = authenticator("alice:secret\n", PasswordScheme::Plaintext);
        assert!(auth.authenticate("alice", "secret"));
        assert!(!auth.authenticate("alice", "wrong"));
        assert!(!auth.authenticate("mallory", "secret"));
        assert!(auth.is_known("alice"));
    }

    #[test]
    fn bcrypt_login() {
        let hash = bcrypt::hash("secret", 4).unwrap();
        let auth = authenticator(&format!("alice:{}\n", hash), PasswordScheme::Bcrypt);
        assert!(auth.authenticate("alice", "secret"));
        assert!(!auth.authenticate("alice", "Secret"));
    }

    #[test]
    fn bcrypt_rejects_plaintext_entries() {
        let auth = authenticator("alice:secret\n", PasswordScheme::Bcrypt);
        assert!(!auth.authenticate("alice", "secret"));
    }
}
