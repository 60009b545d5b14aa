use crate::error::Result;
use crate::params::{Params, LEGACY_URLS};
use cartographer_models::ALL_WORKSPACES;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::borrow::Cow;

pub const WORKSPACE_HEADER: &str = "workspace";

/// Shape of the API being talked to. Legacy servers take the workspace from a
/// header and use a few older path templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    Current,
    Legacy,
}

impl Generation {
    pub fn of(params: &Params) -> Self {
        if params.flag(LEGACY_URLS) {
            Generation::Legacy
        } else {
            Generation::Current
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryValue<'a> {
    Text(&'a str),
    Flag(bool),
    Number(u64),
    Absent,
}

impl QueryValue<'_> {
    /// The text that goes after `key=`, or `None` when the pair is dropped.
    pub fn render(&self) -> Option<Cow<'_, str>> {
        match *self {
            QueryValue::Text(text) if !text.is_empty() => Some(Cow::Borrowed(text)),
            QueryValue::Flag(true) => Some(Cow::Borrowed("true")),
            QueryValue::Flag(false) => Some(Cow::Borrowed("false")),
            QueryValue::Number(num) if num != 0 => Some(Cow::Owned(num.to_string())),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.render().is_some()
    }
}

/// Joins `scheme://host/path?k=v&...`, keeping the order of `query`.
///
/// Values are written as-is, without percent-encoding.
pub fn create_url(scheme: &str, host: &str, path: &str, query: &[(&str, QueryValue<'_>)]) -> String {
    let query_string = query
        .iter()
        .filter_map(|(key, value)| value.render().map(|value| format!("{}={}", key, value)))
        .collect::<Vec<_>>()
        .join("&");

    if query_string.is_empty() {
        format!("{}://{}{}", scheme, host, path)
    } else {
        format!("{}://{}{}?{}", scheme, host, path, query_string)
    }
}

pub fn create_headers(
    generation: Generation,
    workspace: Option<&str>,
    token: Option<&str>,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    if generation == Generation::Legacy {
        let workspace = workspace.unwrap_or(ALL_WORKSPACES);
        headers.insert(WORKSPACE_HEADER, HeaderValue::from_str(workspace)?);
    }

    if let Some(token) = token {
        let bearer = format!("Bearer {}", token);
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer)?);
    }

    Ok(headers)
}

pub fn format_json(data: &serde_json::Value, generation: Generation) -> serde_json::Result<String> {
    match generation {
        Generation::Current => serde_json::to_string(data),
        Generation::Legacy => serde_json::to_string_pretty(data),
    }
}
