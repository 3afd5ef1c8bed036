/// The inputs the gate looks at for one navigation.
///
/// Empty token values must already be normalized to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateRequest<'a> {
    pub path: &'a str,
    pub url_token: Option<&'a str>,
    pub cookie_token: Option<&'a str>,
}

impl<'a> GateRequest<'a> {
    pub fn new(path: &'a str, url_token: Option<&'a str>, cookie_token: Option<&'a str>) -> Self {
        Self {
            path,
            url_token: url_token.filter(|t| !t.is_empty()),
            cookie_token: cookie_token.filter(|t| !t.is_empty()),
        }
    }
}
