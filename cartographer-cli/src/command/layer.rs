use super::*;

pub const COMMANDS: &[(&str, Handler)] = &[("search", search), ("read", read), ("reset", reset)];

fn search(session: &Session, params: &Params) -> Result<Output> {
    let url = session.url("/map/layer", &[("workspace", session.workspace_query(params))]);
    let auth = session.auth(params, Access::Optional)?;
    session.get_json(&url, &auth, session.scoped_headers(params)?)
}

fn read(session: &Session, params: &Params) -> Result<Output> {
    let layer = params.require("layer")?;

    let url = session.url(
        &format!("/map/layer/{}", layer),
        &[("workspace", session.workspace_query(params))],
    );
    let auth = session.auth(params, Access::Optional)?;
    session.get_json(&url, &auth, session.scoped_headers(params)?)
}

/// Recalculates one layer, or every layer when none is named.
fn reset(session: &Session, params: &Params) -> Result<Output> {
    let path = match params.optional("layer") {
        Some(layer) => format!("/map/layer/{}/reset", layer),
        None => "/map/layer/reset".to_owned(),
    };

    let url = session.url(&path, &[]);
    let auth = session.auth(params, Access::Required)?;
    session.get_json(&url, &auth, session.scoped_headers(params)?)
}
