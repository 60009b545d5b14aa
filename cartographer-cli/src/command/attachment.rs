use super::*;

pub const COMMANDS: &[(&str, Handler)] = &[("search", search)];

fn search(session: &Session, params: &Params) -> Result<Output> {
    let module = params.require("module")?;
    let survey = params.require("survey")?;

    let url = session.url(
        "/attachment",
        &[
            ("module", QueryValue::Text(&module)),
            ("survey", QueryValue::Text(&survey)),
            ("folder", params.query("folder")),
        ],
    );
    let auth = session.auth(params, Access::Required)?;
    session.get_json(&url, &auth, session.scoped_headers(params)?)
}
