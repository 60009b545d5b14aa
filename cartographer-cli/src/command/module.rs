use super::*;

pub const COMMANDS: &[(&str, Handler)] = &[("search", search), ("read", read)];

fn search(session: &Session, params: &Params) -> Result<Output> {
    let url = session.url(
        "/survey/module",
        &[("workspace", session.workspace_query(params))],
    );
    let auth = session.auth(params, Access::Required)?;
    session.get_json(&url, &auth, session.scoped_headers(params)?)
}

fn read(session: &Session, params: &Params) -> Result<Output> {
    let id = params.require("id")?;

    let url = session.url(&format!("/survey/module/{}", id), &[]);
    let auth = session.auth(params, Access::Required)?;
    session.get_json(&url, &auth, session.scoped_headers(params)?)
}
