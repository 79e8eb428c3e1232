//! Login endpoint tests

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{send, unique_email, TestApp, BROKEN_STORE_DETAIL};

const LOGIN: &str = "/app/user/login";
const PASSWORD: &str = "s3cret-passphrase";

#[tokio::test]
async fn test_student_login_returns_enrolled_subjects_and_token() {
    let app = TestApp::new();
    let email = unique_email();
    let student = app.register(&email, PASSWORD, "student").await;
    let math = app.store.add_subject("Math", &[]);
    app.store.add_subject("History", &[]);
    app.store.enroll(student, math);

    let (status, body) = app
        .post_json(LOGIN, &json!({ "email": email, "password": PASSWORD }))
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["code"], "00");
    assert_eq!(body["user"]["id"], student);
    assert_eq!(body["user"]["password"], "******");
    let subjects = body["user"]["subjects"].as_array().unwrap();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0]["name"], "Math");

    let token = body["accessToken"].as_str().unwrap();
    let claims = app.tokens.decode_token(token).unwrap();
    assert_eq!(claims.sub, student.to_string());
    assert_eq!(claims.email, email);
    assert!(claims.subjects.is_empty());
}

#[tokio::test]
async fn test_tutor_login_sees_whole_catalog_with_author_names() {
    let app = TestApp::new();
    let email = unique_email();
    let tutor = app.register(&email, PASSWORD, "tutor").await;
    let other = app.register(&unique_email(), PASSWORD, "Tutor").await;
    app.store.add_subject("Math", &[tutor, other]);
    app.store.add_subject("Physics", &[other]);
    app.store.add_subject("Chemistry", &[]);

    let (status, body) = app
        .post_json(LOGIN, &json!({ "email": email, "password": PASSWORD }))
        .await;

    assert_eq!(status, 200);
    let subjects = body["user"]["subjects"].as_array().unwrap();
    assert_eq!(subjects.len(), 3);
    assert_eq!(subjects[0]["questions"][0]["tutorName"], "Test tutor");
    assert_eq!(subjects[0]["questions"][1]["tutorName"], "Test Tutor");
    assert_eq!(subjects[1]["questions"][0]["tutorName"], "Test Tutor");
    assert!(subjects[2]["questions"].as_array().unwrap().is_empty());

    let claims = app
        .tokens
        .decode_token(body["accessToken"].as_str().unwrap())
        .unwrap();
    assert!(claims.subjects.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    let email = unique_email();
    app.register(&email, PASSWORD, "student").await;

    let (status, body) = app
        .post_json(LOGIN, &json!({ "email": email, "password": "guess" }))
        .await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "code": "02", "desc": "Wrong email or password" }));
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            LOGIN,
            &json!({ "email": unique_email(), "password": PASSWORD }),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "code": "02", "desc": "Wrong email or password" }));
}

#[tokio::test]
async fn test_login_validation_order() {
    let app = TestApp::new();

    let (_, body) = app.post_json(LOGIN, &json!({})).await;
    assert_eq!(body["desc"], "Please enter your email");

    let (_, body) = app.post_json(LOGIN, &json!({ "email": "nobody@" })).await;
    assert_eq!(body["desc"], "Invalid format email");

    let (_, body) = app
        .post_json(LOGIN, &json!({ "email": "a@b.com", "password": "" }))
        .await;
    assert_eq!(body["code"], "01");
    assert_eq!(body["desc"], "Please enter your password");
}

#[tokio::test]
async fn test_login_storage_failure_hides_detail() {
    let router = TestApp::broken();
    let body = json!({ "email": "a@b.com", "password": PASSWORD }).to_string();

    let (status, body) = send(&router, "POST", LOGIN, Some(body)).await;

    assert_eq!(status, 500);
    assert_eq!(body["code"], "99");
    assert_eq!(body["desc"], "System error. Please try again");
    assert!(!body.to_string().contains(BROKEN_STORE_DETAIL));
}
