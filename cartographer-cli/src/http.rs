use crate::error::Result;
use cartographer_models::{Credentials, HttpError};
use reqwest::blocking as http;
use reqwest::header::HeaderMap;
use serde::Serialize;

pub use reqwest::blocking::Response;

#[derive(Debug, Clone)]
pub enum Auth {
    None,
    Basic(Credentials),
}

/// Single-shot blocking client. Every call sends exactly one request and
/// turns 4xx/5xx answers into [`HttpError`].
#[derive(Debug, Clone)]
pub struct Transport {
    client: http::Client,
}

impl Transport {
    pub fn new() -> Result<Self> {
        let client = http::Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn get(&self, url: &str, auth: &Auth, headers: HeaderMap) -> Result<Response> {
        log::debug!("GET {}", url);
        self.send(self.client.get(url).headers(headers), auth)
    }

    pub fn post<T>(&self, url: &str, auth: &Auth, headers: HeaderMap, body: &T) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        log::debug!("POST {}", url);
        self.send(self.client.post(url).headers(headers).json(body), auth)
    }

    pub fn put<T>(&self, url: &str, auth: &Auth, headers: HeaderMap, body: &T) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        log::debug!("PUT {}", url);
        self.send(self.client.put(url).headers(headers).json(body), auth)
    }

    fn send(&self, request: http::RequestBuilder, auth: &Auth) -> Result<Response> {
        let request = match auth {
            Auth::None => request,
            Auth::Basic(credentials) => {
                request.basic_auth(&credentials.email, Some(&credentials.password))
            }
        };

        let response = request.send()?;
        log::debug!("{} {}", response.status(), response.url());

        check_status(response)
    }
}

pub fn check_status(response: Response) -> Result<Response> {
    let status = response.status();

    if HttpError::is_error_status(status.as_u16()) {
        // Standard phrase for the code; the server's own phrase is not kept.
        let reason = status.canonical_reason().unwrap_or("Unknown Status");
        return Err(HttpError::new(status.as_u16(), reason).into());
    }

    Ok(response)
}
