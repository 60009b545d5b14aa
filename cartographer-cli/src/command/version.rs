use super::*;

/// Unauthenticated, so it also works against servers the profile has no credentials for.
pub fn execute(session: &Session, _params: &Params) -> Result<Output> {
    let url = session.url("/version", &[]);
    session.get_json(&url, &Auth::None, HeaderMap::new())
}
