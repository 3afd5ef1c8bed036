use crate::{
    AppState, GateDecision, GateRequest, SessionCookie, TOKEN_QUERY_PARAM, UNAUTHORIZED_PATH,
    query_without_token,
};

use axum::{
    extract::{Request, State},
    http::Uri,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use url::form_urlencoded;

/// Axum middleware running the access gate in front of page navigations
pub async fn access_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if !state.gate.scope().applies_to(request.uri().path()) {
        return next.run(request).await;
    }

    let url_token = SessionCookie::url_token(request.uri());
    let cookie_token = state.session_cookie.get_session_token(request.headers());
    let gate_request = GateRequest::new(
        request.uri().path(),
        url_token.as_deref(),
        cookie_token.as_deref(),
    );

    match state.gate.decide(&gate_request).await {
        GateDecision::Allow => next.run(request).await,
        GateDecision::AllowAndSetCookie { token } => {
            let mut response = next.run(request).await;
            state.session_cookie.set_session_token(&mut response, &token);
            response
        }
        GateDecision::RedirectWithToken { token } => {
            Redirect::temporary(&location_with_token(request.uri(), &token)).into_response()
        }
        GateDecision::RedirectUnauthorized => {
            Redirect::temporary(UNAUTHORIZED_PATH).into_response()
        }
        GateDecision::RedirectUnauthorizedAndClearCookie => {
            let mut response = Redirect::temporary(UNAUTHORIZED_PATH).into_response();
            state.session_cookie.clear_session_token(&mut response);
            response
        }
    }
}

/// Same path and query, with `token` replaced by the given value
pub fn location_with_token(uri: &Uri, token: &str) -> String {
    let kept = uri.query().map(query_without_token).unwrap_or_default();
    let token_pair = form_urlencoded::Serializer::new(String::new())
        .append_pair(TOKEN_QUERY_PARAM, token)
        .finish();

    if kept.is_empty() {
        format!("{}?{}", uri.path(), token_pair)
    } else {
        format!("{}?{}&{}", uri.path(), kept, token_pair)
    }
}
