use crate::error::{Error, Result};
use crate::fetch::QueryValue;
use std::collections::{btree_map::Entry, BTreeMap};

pub const LEGACY_URLS: &str = "legacy_urls";
pub const LEGACY_JSON: &str = "legacy_json";

/// Environment variables consulted for the legacy API generation, with the
/// parameter each one fills.
pub const LEGACY_ENV: &[(&str, &str)] = &[
    ("CARTOGRAPHER_SCHEME", "scheme"),
    ("CARTOGRAPHER_HOST", "host"),
    ("CARTOGRAPHER_WORKSPACE", "workspace"),
    ("CARTOGRAPHER_EMAIL", "email"),
    ("CARTOGRAPHER_PASSWORD", "password"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Text(String),
    Flag(bool),
    Number(u64),
}

impl Param {
    pub fn is_truthy(&self) -> bool {
        match self {
            Param::Text(text) => !text.is_empty(),
            Param::Flag(flag) => *flag,
            Param::Number(num) => *num != 0,
        }
    }

    pub fn as_query(&self) -> QueryValue<'_> {
        match self {
            Param::Text(text) => QueryValue::Text(text),
            Param::Flag(flag) => QueryValue::Flag(*flag),
            Param::Number(num) => QueryValue::Number(*num),
        }
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Param::Text(text) => f.write_str(text),
            Param::Flag(flag) => write!(f, "{}", flag),
            Param::Number(num) => write!(f, "{}", num),
        }
    }
}

impl From<String> for Param {
    fn from(text: String) -> Self {
        Param::Text(text)
    }
}

impl From<&str> for Param {
    fn from(text: &str) -> Self {
        Param::Text(text.to_owned())
    }
}

impl From<bool> for Param {
    fn from(flag: bool) -> Self {
        Param::Flag(flag)
    }
}

impl From<u64> for Param {
    fn from(num: u64) -> Self {
        Param::Number(num)
    }
}

impl From<u32> for Param {
    fn from(num: u32) -> Self {
        Param::Number(num.into())
    }
}

/// Flat key/value mapping handed to every command handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, Param>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Param>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<Param>) {
        self.0.insert(key.to_owned(), value.into());
    }

    pub fn set_opt<V: Into<Param>>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Param> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Rendered value of `key`. Empty text counts as missing, a zero number does not.
    pub fn require(&self, key: &str) -> Result<String> {
        match self.0.get(key) {
            None => Err(Error::missing(key)),
            Some(Param::Text(text)) if text.is_empty() => Err(Error::missing(key)),
            Some(param) => Ok(param.to_string()),
        }
    }

    /// Rendered value of `key` when it is truthy.
    pub fn optional(&self, key: &str) -> Option<String> {
        self.0
            .get(key)
            .filter(|param| param.is_truthy())
            .map(Param::to_string)
    }

    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(Param::Flag(true)))
    }

    pub fn query(&self, key: &str) -> QueryValue<'_> {
        self.0
            .get(key)
            .map(Param::as_query)
            .unwrap_or(QueryValue::Absent)
    }

    /// Layers `overlay` on top of `self`. A falsy overlay value only fills a
    /// key that is not set yet, so it can never blank out an existing value.
    pub fn merge(&mut self, overlay: Params) {
        for (key, value) in overlay.0 {
            match self.0.entry(key) {
                Entry::Occupied(mut slot) => {
                    if value.is_truthy() {
                        slot.insert(value);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
            }
        }
    }

    pub fn from_env<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut params = Params::new();
        for (var, key) in LEGACY_ENV {
            params.set_opt(key, lookup(var));
        }
        params
    }

    /// Builds the mapping a command runs with: profile first, then the
    /// `CARTOGRAPHER_*` environment when the legacy API is selected, then CLI.
    pub fn assemble<F>(profile: Params, cli: Params, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let legacy = cli.flag(LEGACY_URLS) || profile.flag(LEGACY_URLS);

        let mut params = profile;
        if legacy {
            params.merge(Params::from_env(env));
        }
        params.merge(cli);
        params
    }
}
