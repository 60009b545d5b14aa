pub mod attachment;
pub mod auth;
pub mod feature;
pub mod layer;
pub mod module;
pub mod survey;
pub mod upload;
pub mod user;
pub mod version;
pub mod workspace;

use crate::error::{Error, Result};
use crate::fetch::{self, Generation, QueryValue};
use crate::http::{Auth, Transport};
use crate::params::{Params, LEGACY_JSON};
use crate::utils::{self, OptionExt};
use bytes::Bytes;
use cartographer_models::{Credentials, API_PREFIX};
use reqwest::header::HeaderMap;
use serde::Serialize;
use std::io::Write;

pub type Handler = fn(&Session, &Params) -> Result<Output>;

pub enum Entry {
    Leaf(Handler),
    Group(&'static [(&'static str, Handler)]),
}

pub struct Registry(&'static [(&'static str, Entry)]);

pub static REGISTRY: Registry = Registry(&[
    ("workspace", Entry::Group(workspace::COMMANDS)),
    ("module", Entry::Group(module::COMMANDS)),
    ("survey", Entry::Group(survey::COMMANDS)),
    ("user", Entry::Group(user::COMMANDS)),
    ("layer", Entry::Group(layer::COMMANDS)),
    ("feature", Entry::Group(feature::COMMANDS)),
    ("attachment", Entry::Group(attachment::COMMANDS)),
    ("upload", Entry::Group(upload::COMMANDS)),
    ("auth", Entry::Group(auth::COMMANDS)),
    ("version", Entry::Leaf(version::execute)),
]);

impl Registry {
    pub fn lookup(&self, command: &str, subcommand: Option<&str>) -> Result<Handler> {
        let not_found = || Error::CommandNotFound {
            command: command.to_owned(),
            subcommand: subcommand.map(str::to_owned),
        };

        let (_, entry) = self
            .0
            .iter()
            .find(|(name, _)| *name == command)
            .ok_or_else(not_found)?;

        match entry {
            Entry::Leaf(handler) => Ok(*handler),
            Entry::Group(table) => {
                let subcommand = subcommand.ok_or_else(not_found)?;
                table
                    .iter()
                    .find(|(name, _)| *name == subcommand)
                    .map(|(_, handler)| *handler)
                    .ok_or_else(not_found)
            }
        }
    }

    pub fn dispatch(&self, params: &Params) -> Result<Output> {
        let command = params.require("command")?;
        let subcommand = params.optional("subcommand");
        let handler = self.lookup(&command, subcommand.as_deref())?;

        let session = Session::from_params(params)?;
        handler(&session, params)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Json(serde_json::Value),
    Binary(Bytes),
}

impl Output {
    pub fn write_to<W: Write>(&self, out: &mut W, generation: Generation) -> std::io::Result<()> {
        match self {
            Output::Json(data) => writeln!(out, "{}", fetch::format_json(data, generation)?),
            Output::Binary(bytes) => out.write_all(bytes),
        }
    }
}

/// How a handler authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No credentials and no headers.
    Public,
    /// Basic auth when both email and password are known.
    Optional,
    /// Basic auth; legacy servers prompt for whatever is missing.
    Required,
}

/// Everything a handler needs besides its parameters.
pub struct Session {
    scheme: String,
    host: String,
    generation: Generation,
    legacy_json: bool,
    transport: Transport,
}

impl Session {
    pub fn from_params(params: &Params) -> Result<Self> {
        Ok(Self {
            scheme: params.require("scheme")?,
            host: params.require("host")?,
            generation: Generation::of(params),
            legacy_json: params.flag(LEGACY_JSON),
            transport: Transport::new()?,
        })
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn url(&self, path: &str, query: &[(&str, QueryValue<'_>)]) -> String {
        let path = format!("{}{}", API_PREFIX, path);
        fetch::create_url(&self.scheme, &self.host, &path, query)
    }

    /// `workspace` as a query value. Legacy servers read it from a header instead.
    pub fn workspace_query<'p>(&self, params: &'p Params) -> QueryValue<'p> {
        match self.generation {
            Generation::Current => params.query("workspace"),
            Generation::Legacy => QueryValue::Absent,
        }
    }

    /// Survey `format`, falling back to `legacy` when the profile asks for legacy JSON.
    pub fn format_query<'p>(&self, params: &'p Params) -> QueryValue<'p> {
        match params.query("format") {
            value if value.is_present() => value,
            _ if self.legacy_json => QueryValue::Text("legacy"),
            _ => QueryValue::Absent,
        }
    }

    pub fn headers(&self, params: &Params, workspace: Option<&str>) -> Result<HeaderMap> {
        let token = params.optional("token");
        fetch::create_headers(self.generation, workspace, token.as_deref())
    }

    /// Headers scoped to the `workspace` parameter.
    pub fn scoped_headers(&self, params: &Params) -> Result<HeaderMap> {
        let workspace = params.optional("workspace");
        self.headers(params, workspace.as_deref())
    }

    pub fn credentials(&self, params: &Params) -> Result<Credentials> {
        let (email, password) = match self.generation {
            Generation::Current => (params.require("email")?, params.require("password")?),
            Generation::Legacy => (
                params
                    .optional("email")
                    .ok_or_try(|| utils::prompt_email().map_err(Error::Prompt))?,
                params
                    .optional("password")
                    .ok_or_try(|| utils::prompt_password().map_err(Error::Prompt))?,
            ),
        };

        Ok(Credentials::new(email, password))
    }

    /// Basic-auth credentials for a request. A bearer token, which travels in
    /// the headers, takes their place.
    pub fn auth(&self, params: &Params, access: Access) -> Result<Auth> {
        if access == Access::Public || params.optional("token").is_some() {
            return Ok(Auth::None);
        }

        match access {
            Access::Optional => match (params.optional("email"), params.optional("password")) {
                (Some(email), Some(password)) => Ok(Auth::Basic(Credentials::new(email, password))),
                _ => Ok(Auth::None),
            },
            _ => self.credentials(params).map(Auth::Basic),
        }
    }

    pub fn get_json(&self, url: &str, auth: &Auth, headers: HeaderMap) -> Result<Output> {
        let response = self.transport.get(url, auth, headers)?;
        Ok(Output::Json(response.json()?))
    }

    pub fn get_bytes(&self, url: &str, auth: &Auth, headers: HeaderMap) -> Result<Output> {
        let response = self.transport.get(url, auth, headers)?;
        Ok(Output::Binary(response.bytes()?))
    }

    pub fn post_json<T>(&self, url: &str, auth: &Auth, headers: HeaderMap, body: &T) -> Result<Output>
    where
        T: Serialize + ?Sized,
    {
        let response = self.transport.post(url, auth, headers, body)?;
        Ok(Output::Json(response.json()?))
    }
}
