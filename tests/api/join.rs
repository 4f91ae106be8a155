use std::net::TcpListener;
use std::time::Duration;

use secrecy::Secret;
use wiremock::matchers::any;
use wiremock::matchers::body_json;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::ResponseTemplate;

use crate::helpers::form_body;
use crate::helpers::marker_cookie;
use crate::helpers::spawn_app;
use crate::helpers::spawn_app_with;
use crate::helpers::FORM_PATH;

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[tokio::test]
async fn join_forwards_signup_as_json() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "email": "alex@example.com",
            "name": "Alex",
            "source": "visionary-early-access",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.form_server)
        .await;

    let body = form_body(&[("name", "Alex"), ("email", "alex@example.com"), ("agree", "on"), ("website", "")]);
    let resp = app.post_join(body).await;

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(marker_cookie(&resp).as_deref(), Some("1"));

    let html = resp.text().await.unwrap();
    assert!(html.contains("You're on the list"));
    // the form is gone for this page view
    assert!(!html.contains(r#"action="/join""#));
}

#[tokio::test]
async fn join_without_name_sends_empty_name() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .and(body_json(serde_json::json!({
            "email": "jamie@example.com",
            "name": "",
            "source": "visionary-early-access",
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&app.form_server)
        .await;

    let resp = app.post_join(form_body(&[("email", "jamie@example.com"), ("agree", "on")])).await;
    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn join_invalid_email_is_rejected_locally() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.form_server)
        .await;

    for (body, msg) in [
        (form_body(&[("email", "foo"), ("agree", "on")]), "no at"),
        (form_body(&[("email", "@bar.com"), ("agree", "on")]), "no local part"),
        (form_body(&[("email", "a@b"), ("agree", "on")]), "no tld"),
        (form_body(&[("email", ""), ("agree", "on")]), "empty email"),
        (form_body(&[("agree", "on")]), "missing email"),
        (String::new(), "empty body"),
    ] {
        let resp = app.post_join(body).await;
        assert_eq!(resp.status().as_u16(), 400, "{msg}");
        assert_eq!(marker_cookie(&resp), None, "{msg}");
        let html = resp.text().await.unwrap();
        assert!(html.contains("Please enter a valid email."), "{msg}");
    }
}

#[tokio::test]
async fn join_without_consent_is_rejected_locally() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.form_server)
        .await;

    for (body, msg) in [
        (form_body(&[("email", "alex@example.com")]), "unticked"),
        (form_body(&[("email", "alex@example.com"), ("agree", "off")]), "explicitly off"),
    ] {
        let resp = app.post_join(body).await;
        assert_eq!(resp.status().as_u16(), 400, "{msg}");
        let html = resp.text().await.unwrap();
        assert!(html.contains("Please agree to be contacted about early access."), "{msg}");
        // what was typed stays in the form
        assert!(html.contains(r#"value="alex@example.com""#), "{msg}");
    }
}

#[tokio::test]
async fn join_with_honeypot_fakes_success() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.form_server)
        .await;

    let body = form_body(&[("email", "bot@example.com"), ("agree", "on"), ("website", "http://spam.example")]);
    let resp = app.post_join(body).await;

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(marker_cookie(&resp), None);
    let html = resp.text().await.unwrap();
    assert!(html.contains("You're on the list"));
    assert!(!html.contains(r#"action="/join""#));
}

#[tokio::test]
async fn join_with_honeypot_still_reports_validation_errors() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.form_server)
        .await;

    for (body, expected, msg) in [
        (
            form_body(&[("email", "not-an-email"), ("agree", "on"), ("website", "x")]),
            "Please enter a valid email.",
            "bad email",
        ),
        (
            form_body(&[("email", "not-an-email"), ("website", "x")]),
            "Please enter a valid email.",
            "bad email, unticked",
        ),
        (
            form_body(&[("email", "bot@example.com"), ("website", "x")]),
            "Please agree to be contacted about early access.",
            "unticked",
        ),
    ] {
        let resp = app.post_join(body).await;
        assert_eq!(resp.status().as_u16(), 400, "{msg}");
        assert_eq!(marker_cookie(&resp), None, "{msg}");
        let html = resp.text().await.unwrap();
        assert!(html.contains(expected), "{msg}");
        assert!(!html.contains("You're on the list"), "{msg}");
    }
}

#[tokio::test]
async fn join_upstream_error_keeps_input() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .respond_with(ResponseTemplate::new(500))
        // no retry
        .expect(1)
        .mount(&app.form_server)
        .await;

    let body = form_body(&[("name", "Ravi"), ("email", "ravi@example.com"), ("agree", "on")]);
    let resp = app.post_join(body).await;

    assert_eq!(resp.status().as_u16(), 500);
    assert_eq!(marker_cookie(&resp), None);
    let html = resp.text().await.unwrap();
    assert!(html.contains(GENERIC_FAILURE));
    assert!(html.contains(r#"value="Ravi""#));
    assert!(html.contains(r#"value="ravi@example.com""#));
    // the button is usable again
    assert!(html.contains("Join Early Access</button>"));
    assert!(!html.contains(r#"type="submit" disabled"#));
}

#[tokio::test]
async fn join_upstream_timeout_looks_like_any_failure() {
    let app = spawn_app_with(|cfg| cfg.form_endpoint.timeout_milliseconds = Some(200)).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&app.form_server)
        .await;

    let resp = app
        .post_join(form_body(&[("email", "ravi@example.com"), ("agree", "on")]))
        .await;

    assert_eq!(resp.status().as_u16(), 500);
    assert!(resp.text().await.unwrap().contains(GENERIC_FAILURE));
}

#[tokio::test]
async fn join_unreachable_endpoint_looks_like_any_failure() {
    // grab a free port, then let it go so nothing is listening there
    let closed_port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let app = spawn_app_with(|cfg| {
        cfg.form_endpoint.url = Secret::new(format!("http://127.0.0.1:{closed_port}{FORM_PATH}"));
    })
    .await;

    let resp = app
        .post_join(form_body(&[("email", "ravi@example.com"), ("agree", "on")]))
        .await;

    assert_eq!(resp.status().as_u16(), 500);
    assert!(resp.text().await.unwrap().contains(GENERIC_FAILURE));
}

#[tokio::test]
async fn join_is_not_deduplicated() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.form_server)
        .await;

    for _ in 0..2 {
        let resp = app
            .post_join(form_body(&[("email", "alex@example.com"), ("agree", "on")]))
            .await;
        assert_eq!(resp.status().as_u16(), 200);
    }
}

#[tokio::test]
async fn join_success_survives_disabled_marker_storage() {
    let app = spawn_app_with(|cfg| cfg.marker.enabled = false).await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.form_server)
        .await;

    let resp = app
        .post_join(form_body(&[("email", "alex@example.com"), ("agree", "on")]))
        .await;

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(marker_cookie(&resp), None);
    assert!(resp.text().await.unwrap().contains("You're on the list"));
}
