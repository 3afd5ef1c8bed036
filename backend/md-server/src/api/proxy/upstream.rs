use std::fmt;

/// Backend family a proxied request is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// General dashboard API, selected per tenant
    Mortdash,
    /// Account-executive API, selected per tenant
    AccountExecutive,
    /// Marketing API, shared by all tenants
    Marketing,
}

impl Upstream {
    pub fn label(&self) -> &'static str {
        match self {
            Upstream::Mortdash => "mortdash",
            Upstream::AccountExecutive => "ae",
            Upstream::Marketing => "marketing",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
