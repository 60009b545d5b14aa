use super::*;

pub const COMMANDS: &[(&str, Handler)] = &[("search", search), ("tile", tile), ("reset", reset)];

fn search(session: &Session, params: &Params) -> Result<Output> {
    let layer = params.require("layer")?;

    let url = session.url(
        &format!("/map/{}", layer),
        &[
            ("workspace", session.workspace_query(params)),
            ("simplify", params.query("simplify")),
        ],
    );
    eprintln!("{}", url);

    let auth = session.auth(params, Access::Optional)?;
    session.get_json(&url, &auth, session.scoped_headers(params)?)
}

/// Raw vector tile bytes, passed through without decoding.
fn tile(session: &Session, params: &Params) -> Result<Output> {
    let layer = params.require("layer")?;
    let z = params.require("z")?;
    let x = params.require("x")?;
    let y = params.require("y")?;

    let url = session.url(
        &format!("/map/{}/{}/{}/{}", layer, z, x, y),
        &[("workspace", session.workspace_query(params))],
    );
    eprintln!("{}", url);

    let auth = session.auth(params, Access::Optional)?;
    session.get_bytes(&url, &auth, session.scoped_headers(params)?)
}

fn reset(session: &Session, params: &Params) -> Result<Output> {
    let path = match params.optional("layer") {
        Some(layer) => format!("/map/{}/reset", layer),
        None => "/map/reset".to_owned(),
    };

    let url = session.url(&path, &[]);
    let auth = session.auth(params, Access::Required)?;
    session.get_json(&url, &auth, session.scoped_headers(params)?)
}
