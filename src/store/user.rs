use std::path::PathBuf;
use crate::errors::StoreResult;
use crate::models::User;
use super::{FlatFile, LineRecord};

impl LineRecord for User {
    type Key = String;

    const DELIMITER: char = ':';
    const FIELDS: &'static [&'static str] = &["username", "password"];

    fn key(&self) -> String {
        self.username.clone()
    }

    fn from_fields(fields: &[&str]) -> Result<Self, String> {
        Ok(User {
            username: fields[0].to_string(),
            password: fields[1].to_string(),
        })
    }

    fn fields(&self) -> Vec<String> {
        vec![self.username.clone(), self.password.clone()]
    }
}

/// Login credentials from a `username:password` file. Read once at start-up.
pub struct UserStore {
    file: FlatFile<User>,
}

impl UserStore {
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let file = FlatFile::<User>::load(path)?;
        if file.is_empty() {
            tracing::warn!("No users loaded from {}, nobody can log in", file.path().display());
        } else {
            tracing::info!("Loaded {} users from {}", file.len(), file.path().display());
        }
        Ok(Self { file })
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        self.file.get(&username.to_string())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.file.contains(&username.to_string())
    }
}
