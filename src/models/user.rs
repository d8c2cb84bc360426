#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,  // plaintext or a bcrypt hash, depending on auth.password_scheme
}
