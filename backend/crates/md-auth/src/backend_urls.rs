/// General API origin and account-executive API origin for one tenant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendUrls {
    pub api_base_url: String,
    pub ae_base_url: String,
}

impl BackendUrls {
    pub fn new(api_base_url: impl Into<String>, ae_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ae_base_url: ae_base_url.into(),
        }
    }
}
