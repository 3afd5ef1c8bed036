/// Outcome of evaluating one page navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Pass through unmodified
    Allow,
    /// Pass through and persist the URL token into the session cookie
    AllowAndSetCookie { token: String },
    /// Redirect to the same path with the cookie token appended as `token=`
    RedirectWithToken { token: String },
    /// Redirect to the unauthorized page
    RedirectUnauthorized,
    /// Redirect to the unauthorized page and delete the stale session cookie
    RedirectUnauthorizedAndClearCookie,
}

impl GateDecision {
    /// Stable name for logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            GateDecision::Allow => "allow",
            GateDecision::AllowAndSetCookie { .. } => "allow_and_set_cookie",
            GateDecision::RedirectWithToken { .. } => "redirect_with_token",
            GateDecision::RedirectUnauthorized => "redirect_unauthorized",
            GateDecision::RedirectUnauthorizedAndClearCookie => {
                "redirect_unauthorized_and_clear_cookie"
            }
        }
    }
}
