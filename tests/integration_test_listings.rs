mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp, DEMO_EMAIL, DEMO_PASSWORD};
use medicare_portal::infra::seed::{seed_demo_data, SeedReport};

#[tokio::test]
async fn test_services_are_global() {
    let app = TestApp::new().await;
    let cookie = app.login(DEMO_EMAIL, DEMO_PASSWORD).await;

    let res = app.get("/services", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let services = body.as_array().unwrap();
    assert_eq!(services.len(), 4);
    assert_eq!(services[0]["name"], "General Consultation");
    assert_eq!(services[0]["price"], 50);
    assert_eq!(services[1]["price"], 180);
}

#[tokio::test]
async fn test_demo_user_sees_seeded_rows() {
    let app = TestApp::new().await;
    let cookie = app.login(DEMO_EMAIL, DEMO_PASSWORD).await;

    let records = parse_body(app.get("/records", Some(&cookie)).await).await;
    let titles: Vec<&str> = records.as_array().unwrap().iter().map(|r| r["title"].as_str().unwrap()).collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Annual Physical 2024"));
    assert!(titles.contains(&"Allergy Panel"));

    let prescriptions = parse_body(app.get("/prescriptions", Some(&cookie)).await).await;
    let items = prescriptions.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["medication"], "Atorvastatin 10mg");
    assert_eq!(items[0]["doctor_name"], "Dr. Sarah Johnson");

    let invoices = parse_body(app.get("/billing", Some(&cookie)).await).await;
    let invoices = invoices.as_array().unwrap();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0]["status"], "Paid");
    assert_eq!(invoices[0]["amount"], 50);
}

#[tokio::test]
async fn test_new_user_sees_only_their_rows() {
    let app = TestApp::new().await;
    app.register("New Comer", "newcomer@example.com", "secret1").await;
    let cookie = app.login("newcomer@example.com", "secret1").await;

    for path in ["/records", "/prescriptions", "/billing"] {
        let body = parse_body(app.get(path, Some(&cookie)).await).await;
        assert!(body.as_array().unwrap().is_empty(), "{} should be empty", path);
    }
    let services = parse_body(app.get("/services", Some(&cookie)).await).await;
    assert_eq!(services.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_invoice_status_is_constrained() {
    let app = TestApp::new().await;
    let result = sqlx::query("INSERT INTO invoices (user_id, item, amount, status, issued_on) VALUES (1, 'X', 10, 'Refunded', '2030-01-01')")
        .execute(&app.pool)
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_seeding_is_idempotent() {
    let app = TestApp::new().await;
    assert_eq!(app.seed_report, SeedReport {
        user_created: true,
        doctors_created: 9,
        services_created: 4,
        sample_data_created: true,
    });

    let users = app.count("users").await;
    let appointments = app.count("appointments").await;

    let second = seed_demo_data(&app.state).await.unwrap();
    assert_eq!(second, SeedReport::default());
    assert_eq!(app.count("users").await, users);
    assert_eq!(app.count("doctors").await, 9);
    assert_eq!(app.count("services").await, 4);
    assert_eq!(app.count("appointments").await, appointments);
}
