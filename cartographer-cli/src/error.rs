use crate::profile::ProfileError;
use cartographer_models::HttpError;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required parameter: {0}")]
    MissingParam(String),

    #[error("Command not found: {}", command_label(.command, .subcommand))]
    CommandNotFound {
        command: String,
        subcommand: Option<String>,
    },

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("Failed to read credentials from the terminal: {0}")]
    Prompt(#[source] std::io::Error),
}

fn command_label(command: &str, subcommand: &Option<String>) -> String {
    match subcommand {
        Some(sub) => format!("{} {}", command, sub),
        None => command.to_owned(),
    }
}

impl Error {
    pub fn missing(key: &str) -> Self {
        Self::MissingParam(key.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_not_found_names_both_levels() {
        let err = Error::CommandNotFound {
            command: "layer".into(),
            subcommand: Some("frob".into()),
        };
        assert_eq!(err.to_string(), "Command not found: layer frob");

        let err = Error::CommandNotFound {
            command: "frob".into(),
            subcommand: None,
        };
        assert_eq!(err.to_string(), "Command not found: frob");
    }

    #[test]
    fn http_error_is_shown_verbatim() {
        let err: Error = HttpError::new(503, "Service Unavailable").into();
        assert_eq!(err.to_string(), "Server returned 503 Service Unavailable");
    }
}
