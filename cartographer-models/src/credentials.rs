use serde::{Deserialize, Serialize};

/// Login payload posted to the auth endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_login_body() {
        let body = serde_json::to_value(Credentials::new("a@b.c", "hunter2")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "email": "a@b.c", "password": "hunter2" })
        );
    }

    #[test]
    fn debug_hides_password() {
        let debug = format!("{:?}", Credentials::new("a@b.c", "hunter2"));
        assert!(debug.contains("a@b.c"));
        assert!(!debug.contains("hunter2"));
    }
}
