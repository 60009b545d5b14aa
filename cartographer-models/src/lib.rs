pub mod credentials;
pub mod error;

pub use credentials::Credentials;
pub use error::HttpError;

/// Workspace value that scopes a request to every workspace the caller can see.
pub const ALL_WORKSPACES: &str = "*";

/// Version prefix shared by every API path.
pub const API_PREFIX: &str = "/v1";
