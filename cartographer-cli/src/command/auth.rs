use super::*;

pub const COMMANDS: &[(&str, Handler)] = &[("login", login)];

/// Exchanges email and password for the server's session payload.
fn login(session: &Session, params: &Params) -> Result<Output> {
    let credentials = session.credentials(params)?;

    let url = session.url("/auth/login", &[]);
    let headers = session.headers(params, None)?;
    session.post_json(&url, &Auth::None, headers, &credentials)
}
