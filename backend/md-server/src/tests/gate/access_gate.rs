use crate::tests::{AllowListVerifier, StalledVerifier, gate_with, token_with_payload};
use crate::{GateDecision, GateRequest, UNAUTHORIZED_PATH};

use md_auth::UnverifiedTokenVerifier;
use serde_json::json;

const GOOD: &str = "good.token.value";
const OTHER_GOOD: &str = "other.good.token";
const BAD: &str = "bad.token.value";

fn gate() -> crate::AccessGate {
    gate_with(AllowListVerifier::new(&[GOOD, OTHER_GOOD]))
}

#[tokio::test]
async fn given_unauthorized_path_when_deciding_then_allowed_without_tokens() {
    let decision = gate()
        .decide(&GateRequest::new(UNAUTHORIZED_PATH, None, None))
        .await;

    assert_eq!(decision, GateDecision::Allow);
}

#[tokio::test]
async fn given_unauthorized_path_with_invalid_cookie_when_deciding_then_allowed() {
    // The redirect target must never redirect again
    let decision = gate()
        .decide(&GateRequest::new(UNAUTHORIZED_PATH, Some(BAD), Some(BAD)))
        .await;

    assert_eq!(decision, GateDecision::Allow);
}

#[tokio::test]
async fn given_no_tokens_when_deciding_then_redirect_unauthorized() {
    let decision = gate()
        .decide(&GateRequest::new("/dashboard", None, None))
        .await;

    assert_eq!(decision, GateDecision::RedirectUnauthorized);
}

#[tokio::test]
async fn given_empty_tokens_when_deciding_then_treated_as_absent() {
    let decision = gate()
        .decide(&GateRequest::new("/dashboard", Some(""), Some("")))
        .await;

    assert_eq!(decision, GateDecision::RedirectUnauthorized);
}

#[tokio::test]
async fn given_invalid_url_token_without_cookie_when_deciding_then_redirect_unauthorized() {
    let decision = gate()
        .decide(&GateRequest::new("/dashboard", Some(BAD), None))
        .await;

    assert_eq!(decision, GateDecision::RedirectUnauthorized);
}

#[tokio::test]
async fn given_invalid_url_token_with_cookie_when_deciding_then_cookie_cleared() {
    // URL token wins even when the cookie itself is valid
    let decision = gate()
        .decide(&GateRequest::new("/dashboard", Some(BAD), Some(GOOD)))
        .await;

    assert_eq!(decision, GateDecision::RedirectUnauthorizedAndClearCookie);
}

#[tokio::test]
async fn given_invalid_cookie_only_when_deciding_then_cookie_cleared() {
    let decision = gate()
        .decide(&GateRequest::new("/dashboard", None, Some(BAD)))
        .await;

    assert_eq!(decision, GateDecision::RedirectUnauthorizedAndClearCookie);
}

#[tokio::test]
async fn given_valid_cookie_only_when_deciding_then_redirect_with_cookie_token() {
    let decision = gate()
        .decide(&GateRequest::new("/dashboard", None, Some(GOOD)))
        .await;

    assert_eq!(
        decision,
        GateDecision::RedirectWithToken {
            token: GOOD.to_string()
        }
    );
}

#[tokio::test]
async fn given_valid_url_token_without_cookie_when_deciding_then_allow_and_set_cookie() {
    let decision = gate()
        .decide(&GateRequest::new("/dashboard", Some(GOOD), None))
        .await;

    assert_eq!(
        decision,
        GateDecision::AllowAndSetCookie {
            token: GOOD.to_string()
        }
    );
}

#[tokio::test]
async fn given_valid_url_token_different_from_cookie_when_deciding_then_cookie_replaced() {
    let decision = gate()
        .decide(&GateRequest::new("/dashboard", Some(OTHER_GOOD), Some(GOOD)))
        .await;

    assert_eq!(
        decision,
        GateDecision::AllowAndSetCookie {
            token: OTHER_GOOD.to_string()
        }
    );
}

#[tokio::test]
async fn given_valid_url_token_different_from_invalid_cookie_when_deciding_then_cookie_replaced() {
    // Only the URL token is verified when both are present
    let decision = gate()
        .decide(&GateRequest::new("/dashboard", Some(GOOD), Some(BAD)))
        .await;

    assert_eq!(
        decision,
        GateDecision::AllowAndSetCookie {
            token: GOOD.to_string()
        }
    );
}

#[tokio::test]
async fn given_url_token_equal_to_cookie_when_deciding_then_allowed_unmodified() {
    let decision = gate()
        .decide(&GateRequest::new("/dashboard", Some(GOOD), Some(GOOD)))
        .await;

    assert_eq!(decision, GateDecision::Allow);
}

#[tokio::test]
async fn given_stalled_verifier_when_deciding_then_token_treated_as_invalid() {
    let gate = gate_with(StalledVerifier);

    let decision = gate
        .decide(&GateRequest::new("/dashboard", Some(GOOD), Some(GOOD)))
        .await;

    assert_eq!(decision, GateDecision::RedirectUnauthorizedAndClearCookie);
}

#[tokio::test]
async fn given_stalled_verifier_when_checking_token_then_invalid() {
    assert!(!gate_with(StalledVerifier).is_valid_token(GOOD).await);
}

#[tokio::test]
async fn given_token_with_cookie_attributes_when_deciding_then_redirect_unauthorized() {
    // Would otherwise be echoed into Set-Cookie and widen the cookie's scope
    let injected = format!(
        "{}; Max-Age=315360000; Path=/admin",
        token_with_payload(&json!({ "sub": "user-1" }))
    );
    let gate = gate_with(AllowListVerifier::new(&[&injected]));

    let decision = gate
        .decide(&GateRequest::new("/dashboard", Some(&injected), None))
        .await;

    assert_eq!(decision, GateDecision::RedirectUnauthorized);
}

#[tokio::test]
async fn given_unverified_verifier_and_suffixed_signature_when_deciding_then_redirect_unauthorized() {
    let injected = format!("{};Domain=evil.test", token_with_payload(&json!({ "sub": "user-1" })));
    let gate = gate_with(UnverifiedTokenVerifier);

    let decision = gate
        .decide(&GateRequest::new("/dashboard", Some(&injected), None))
        .await;

    assert_eq!(decision, GateDecision::RedirectUnauthorized);
}

#[tokio::test]
async fn given_unverified_verifier_and_well_formed_token_when_deciding_then_allow_and_set_cookie() {
    let token = token_with_payload(&json!({ "sub": "user-1" }));
    let gate = gate_with(UnverifiedTokenVerifier);

    let decision = gate
        .decide(&GateRequest::new("/dashboard", Some(&token), None))
        .await;

    assert_eq!(decision, GateDecision::AllowAndSetCookie { token });
}

#[test]
fn test_decision_labels_are_distinct() {
    let labels = [
        GateDecision::Allow.label(),
        GateDecision::AllowAndSetCookie { token: "t".into() }.label(),
        GateDecision::RedirectWithToken { token: "t".into() }.label(),
        GateDecision::RedirectUnauthorized.label(),
        GateDecision::RedirectUnauthorizedAndClearCookie.label(),
    ];

    let unique: std::collections::HashSet<_> = labels.iter().collect();
    assert_eq!(unique.len(), labels.len());
}
