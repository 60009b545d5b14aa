use crate::params::{Param, Params};
use ini::{Ini, ParseOption};
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PROFILE: &str = "default";

const DEFAULTS_SECTION: &str = "DEFAULT";
const CREDENTIALS_FILE_NAME: &str = "credentials";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyType {
    String,
    Boolean,
}

const WHITELIST: &[(&str, KeyType)] = &[
    ("scheme", KeyType::String),
    ("host", KeyType::String),
    ("email", KeyType::String),
    ("password", KeyType::String),
    ("legacy_urls", KeyType::Boolean),
    ("legacy_json", KeyType::Boolean),
];

const DEFAULTS: &[(&str, &str)] = &[
    ("scheme", "https"),
    ("host", "api.cartographer.io"),
    ("legacy_urls", "no"),
    ("legacy_json", "no"),
];

type Section = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read credentials from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },
    #[error("Profile `{0}` not found in any credentials file")]
    NotFound(String),
    #[error("Invalid value for `{key}`: {value:?} is not a boolean")]
    InvalidValue { key: String, value: String },
}

/// Credential files in precedence order: the first file that sets a key wins.
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".credentials")];

    if let Some(home) = dirs_next::home_dir() {
        paths.push(home.join(".cartographer").join(CREDENTIALS_FILE_NAME));
        paths.push(
            home.join(".config")
                .join("cartographer")
                .join(CREDENTIALS_FILE_NAME),
        );
    }

    paths
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    values: Params,
}

impl Profile {
    /// Reads `name` from the credential files. Without a name the `default`
    /// section is used when present, otherwise only the built-in defaults.
    pub fn load(paths: &[PathBuf], name: Option<&str>) -> Result<Self, ProfileError> {
        let mut sections = read_sections(paths)?;

        let mut raw: Section = DEFAULTS
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        if let Some(defaults) = sections.remove(DEFAULTS_SECTION) {
            raw.extend(defaults);
        }

        let section = match name {
            Some(name) => Some(
                take_section(&mut sections, name)
                    .ok_or_else(|| ProfileError::NotFound(name.to_owned()))?,
            ),
            None => take_section(&mut sections, DEFAULT_PROFILE),
        };

        match section {
            Some(section) => {
                log::debug!("Using profile [{}]", name.unwrap_or(DEFAULT_PROFILE));
                raw.extend(section);
            }
            None => log::debug!("No profile section found, using built-in defaults"),
        }

        let mut values = Params::new();
        for (key, value) in raw {
            match key_type(&key) {
                Some(KeyType::String) => values.set(&key, value),
                Some(KeyType::Boolean) => {
                    let flag = parse_bool(&value)
                        .ok_or_else(|| ProfileError::InvalidValue { key: key.clone(), value })?;
                    values.set(&key, flag);
                }
                None => log::warn!("Skipping config key: {}", key),
            }
        }

        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&Param> {
        self.values.get(key)
    }

    pub fn into_params(self) -> Params {
        self.values
    }
}

fn key_type(key: &str) -> Option<KeyType> {
    WHITELIST
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, key_type)| *key_type)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// Values are kept verbatim: quotes and backslashes belong to the value.
fn parse_option() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

fn read_file(path: &Path) -> Result<Option<Ini>, ProfileError> {
    log::debug!("Looking for credentials in {}", path.display());

    match Ini::load_from_file_opt(path, parse_option()) {
        Ok(ini) => Ok(Some(ini)),
        Err(ini::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ProfileError::Read {
            path: path.to_owned(),
            source,
        }),
    }
}

/// Sections by literal name, merged across files.
fn read_sections(paths: &[PathBuf]) -> Result<HashMap<String, Section>, ProfileError> {
    let mut sections: HashMap<String, Section> = HashMap::new();

    // Later files are overridden by earlier ones, so the preferred file goes last.
    for path in paths.iter().rev() {
        let ini = match read_file(path)? {
            Some(ini) => ini,
            None => continue,
        };

        for (name, properties) in ini.iter() {
            let name = match name {
                Some(name) => name,
                None => {
                    for (key, _) in properties.iter() {
                        log::warn!("Skipping config key outside of a profile section: {}", key);
                    }
                    continue;
                }
            };

            let section = sections.entry(name.to_owned()).or_default();
            for (key, value) in properties.iter() {
                section.insert(key.to_lowercase(), value.to_owned());
            }
        }
    }

    Ok(sections)
}

fn take_section(sections: &mut HashMap<String, Section>, name: &str) -> Option<Section> {
    sections
        .remove(name)
        .or_else(|| sections.remove(&name.to_lowercase()))
}
