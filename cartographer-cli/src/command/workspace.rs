use super::*;

pub const COMMANDS: &[(&str, Handler)] = &[("search", search), ("read", read)];

fn search(session: &Session, params: &Params) -> Result<Output> {
    let url = session.url("/workspace", &[]);
    let auth = session.auth(params, Access::Required)?;
    let headers = session.headers(params, None)?;
    session.get_json(&url, &auth, headers)
}

fn read(session: &Session, params: &Params) -> Result<Output> {
    let workspace = params.require("workspace")?;

    let url = session.url(&format!("/workspace/{}", workspace), &[]);
    let auth = session.auth(params, Access::Required)?;
    let headers = session.headers(params, None)?;
    session.get_json(&url, &auth, headers)
}
