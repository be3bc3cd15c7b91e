use std::fmt;

use serde::Deserialize;

/// Payload for creating a new user.
#[derive(Clone, Default, Deserialize)]
pub struct UserCreate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Payload for updating an existing user.
#[derive(Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub password: Option<String>,
    pub role: Option<String>,
}

// Passwords stay out of logs.
impl fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreate")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("age", &self.age)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("role", &self.role)
            .finish()
    }
}

impl fmt::Debug for UserPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPatch")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("age", &self.age)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("role", &self.role)
            .finish()
    }
}
