mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp, DEMO_EMAIL, DEMO_PASSWORD};
use serde_json::Value;

fn names(body: &Value) -> Vec<String> {
    body["doctors"].as_array().unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_directory_without_filters_lists_everyone() {
    let app = TestApp::new().await;
    let cookie = app.login(DEMO_EMAIL, DEMO_PASSWORD).await;

    let res = app.get("/doctors", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["doctors"].as_array().unwrap().len(), 9);
    assert_eq!(body["q"], "");
    assert_eq!(body["spec"], "");

    let specs: Vec<&str> = body["specializations"].as_array().unwrap()
        .iter().map(|s| s.as_str().unwrap()).collect();
    assert_eq!(specs.len(), 9);
    let mut sorted = specs.clone();
    sorted.sort();
    assert_eq!(specs, sorted);
    assert!(specs.contains(&"Cardiology"));
}

#[tokio::test]
async fn test_query_matches_name_or_hospital_case_insensitively() {
    let app = TestApp::new().await;
    let cookie = app.login(DEMO_EMAIL, DEMO_PASSWORD).await;

    let body = parse_body(app.get("/doctors?q=HEART", Some(&cookie)).await).await;
    assert_eq!(names(&body), vec!["Dr. Sarah Johnson"]);
    assert_eq!(body["q"], "HEART");

    let body = parse_body(app.get("/doctors?q=chen", Some(&cookie)).await).await;
    assert_eq!(names(&body), vec!["Dr. Michael Chen"]);

    let body = parse_body(app.get("/doctors?q=center", Some(&cookie)).await).await;
    assert_eq!(body["doctors"].as_array().unwrap().len(), 4);

    // Specialization text is not part of the free-text match.
    let body = parse_body(app.get("/doctors?q=cardio", Some(&cookie)).await).await;
    for doctor in body["doctors"].as_array().unwrap() {
        let name = doctor["name"].as_str().unwrap().to_lowercase();
        let hospital = doctor["hospital"].as_str().unwrap().to_lowercase();
        assert!(name.contains("cardio") || hospital.contains("cardio"));
    }
}

#[tokio::test]
async fn test_specialization_filter_is_exact_and_combines_with_query() {
    let app = TestApp::new().await;
    let cookie = app.login(DEMO_EMAIL, DEMO_PASSWORD).await;

    let body = parse_body(app.get("/doctors?spec=Neurology", Some(&cookie)).await).await;
    assert_eq!(names(&body), vec!["Dr. Michael Chen"]);
    assert_eq!(body["specializations"].as_array().unwrap().len(), 9);

    let body = parse_body(app.get("/doctors?spec=neurology", Some(&cookie)).await).await;
    assert!(names(&body).is_empty());

    let body = parse_body(app.get("/doctors?q=center&spec=Dermatology", Some(&cookie)).await).await;
    assert_eq!(names(&body), vec!["Dr. Aisha Khan"]);

    let body = parse_body(app.get("/doctors?q=heart&spec=Dermatology", Some(&cookie)).await).await;
    assert!(names(&body).is_empty());

    let body = parse_body(app.get("/doctors?q=%20%20&spec=", Some(&cookie)).await).await;
    assert_eq!(names(&body).len(), 9);
}

#[tokio::test]
async fn test_api_doctors_shape() {
    let app = TestApp::new().await;
    let cookie = app.login(DEMO_EMAIL, DEMO_PASSWORD).await;

    let res = app.get("/api/doctors", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let doctors = body.as_array().unwrap();
    assert_eq!(doctors.len(), 9);

    let first = doctors[0].as_object().unwrap();
    let mut keys: Vec<&str> = first.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["bio", "contact", "hospital", "id", "name", "photo", "rating", "specialization", "work_hours"]);
    assert_eq!(first["name"], "Dr. Sarah Johnson");
    assert_eq!(first["rating"], 4.6);
}

#[tokio::test]
async fn test_dashboard_shows_six_doctors() {
    let app = TestApp::new().await;
    let cookie = app.login(DEMO_EMAIL, DEMO_PASSWORD).await;

    let body = parse_body(app.get("/dashboard", Some(&cookie)).await).await;
    assert_eq!(body["doctors"].as_array().unwrap().len(), 6);
    assert_eq!(body["next_appointment"]["doctor_name"], "Dr. Sarah Johnson");
    assert_eq!(body["next_appointment"]["reason"], "Follow-up");
    assert_eq!(body["next_appointment"]["time"], "15:00:00");
    // Seeded "today" follows the server's local calendar.
    assert_eq!(body["next_appointment"]["date"], chrono::Local::now().date_naive().to_string());
}
