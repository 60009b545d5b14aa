use super::*;

pub const COMMANDS: &[(&str, Handler)] = &[
    ("search", search),
    ("summaries", summaries),
    ("blank", blank),
    ("read", read),
];

fn listing_query<'p>(session: &Session, params: &'p Params) -> Vec<(&'static str, QueryValue<'p>)> {
    vec![
        ("workspace", session.workspace_query(params)),
        ("q", params.query("query")),
        ("order", params.query("order")),
        ("skip", params.query("skip")),
        ("limit", params.query("limit")),
        ("format", session.format_query(params)),
    ]
}

fn search(session: &Session, params: &Params) -> Result<Output> {
    let module = params.require("module")?;

    let url = match session.generation() {
        Generation::Current => session.url(
            &format!("/survey/{}", module),
            &listing_query(session, params),
        ),
        Generation::Legacy => session.url(
            "/survey",
            &[
                ("type", QueryValue::Text(&module)),
                ("order", params.query("order")),
                ("skip", params.query("skip")),
                ("limit", params.query("limit")),
                ("q", params.query("query")),
            ],
        ),
    };

    let auth = session.auth(params, Access::Required)?;
    session.get_json(&url, &auth, session.scoped_headers(params)?)
}

fn summaries(session: &Session, params: &Params) -> Result<Output> {
    let module = params.require("module")?;

    let url = session.url(
        &format!("/survey/{}/summary", module),
        &listing_query(session, params),
    );
    let auth = session.auth(params, Access::Required)?;
    session.get_json(&url, &auth, session.scoped_headers(params)?)
}

/// Empty survey document for a module, used as a starting point for new surveys.
fn blank(session: &Session, params: &Params) -> Result<Output> {
    let module = params.require("module")?;

    let url = session.url(
        &format!("/survey/{}/blank", module),
        &[
            ("workspace", session.workspace_query(params)),
            ("format", session.format_query(params)),
        ],
    );
    let auth = session.auth(params, Access::Required)?;
    session.get_json(&url, &auth, session.scoped_headers(params)?)
}

fn read(session: &Session, params: &Params) -> Result<Output> {
    let id = params.require("id")?;

    let path = match session.generation() {
        Generation::Current => format!("/survey/{}/{}", params.require("module")?, id),
        Generation::Legacy => format!("/survey/{}", id),
    };

    let url = session.url(&path, &[("format", session.format_query(params))]);
    let auth = session.auth(params, Access::Required)?;
    session.get_json(&url, &auth, session.scoped_headers(params)?)
}
