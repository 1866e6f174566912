//! Full-surface walkthrough: register, log in, then manage a project and
//! its documents with the issued token.

use actix_web::http::{StatusCode, header};
use actix_web::test as actix_test;
use serde_json::{Value, json};

use crate::inbound::http::test_support::{api_app, expired_token, stub_state, token_for};

async fn read_json(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("response JSON")
}

#[actix_web::test]
async fn registered_user_can_manage_projects_and_documents() {
    let app = actix_test::init_service(api_app(stub_state())).await;

    // Register, then log in with the same credentials.
    let register = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "email": "ada@example.com",
                "name": "Ada",
                "password": "correct horse",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(register.status(), StatusCode::CREATED);
    let registered = read_json(register).await;
    assert_eq!(
        registered.get("email").and_then(Value::as_str),
        Some("ada@example.com")
    );
    assert!(registered.get("password_digest").is_none());

    let login = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({
                "email": "ada@example.com",
                "password": "correct horse",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
    let token = read_json(login)
        .await
        .get("token")
        .and_then(Value::as_str)
        .expect("token in login response")
        .to_owned();
    let auth_header = (header::AUTHORIZATION, format!("Bearer {token}"));

    // Create a project and find its id in the listing.
    let create_project = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(auth_header.clone())
            .set_json(json!({ "name": "Apollo" }))
            .to_request(),
    )
    .await;
    assert_eq!(create_project.status(), StatusCode::CREATED);

    let projects = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/projects")
            .insert_header(auth_header.clone())
            .to_request(),
    )
    .await;
    let projects = read_json(projects).await;
    let project_id = projects
        .as_array()
        .and_then(|rows| rows.first())
        .and_then(|row| row.get("id"))
        .and_then(Value::as_i64)
        .expect("project id in listing");

    // Add a document and see it listed.
    let create_document = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/projects/{project_id}/documents"))
            .insert_header(auth_header.clone())
            .set_json(json!({ "title": "D1" }))
            .to_request(),
    )
    .await;
    assert_eq!(create_document.status(), StatusCode::CREATED);

    let documents = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/projects/{project_id}/documents"))
            .insert_header(auth_header.clone())
            .to_request(),
    )
    .await;
    let documents = read_json(documents).await;
    let rows = documents.as_array().expect("array body");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("title").and_then(Value::as_str), Some("D1"));
    let document_id = rows[0]
        .get("id")
        .and_then(Value::as_i64)
        .expect("document id in listing");

    // Soft-delete the document; the listing is empty again.
    let delete_document = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/documents/{document_id}"))
            .insert_header(auth_header.clone())
            .to_request(),
    )
    .await;
    assert_eq!(delete_document.status(), StatusCode::NO_CONTENT);

    let documents = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/projects/{project_id}/documents"))
            .insert_header(auth_header)
            .to_request(),
    )
    .await;
    let documents = read_json(documents).await;
    assert_eq!(documents.as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn expired_token_is_rejected_at_the_guard() {
    let app = actix_test::init_service(api_app(stub_state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/projects")
            .insert_header((
                header::AUTHORIZATION,
                format!("Bearer {}", expired_token(1, "user")),
            ))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(response).await;
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some("Invalid or expired token")
    );
}

// The guard authenticates only: there is no ownership or membership check,
// so a token for one user may mutate resources another user created.
#[actix_web::test]
async fn any_authenticated_user_may_act_on_another_users_project() {
    let state = stub_state();
    let owner = token_for(&state, 1, "user");
    let stranger = token_for(&state, 2, "user");
    let app = actix_test::init_service(api_app(state)).await;

    let create = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/projects")
            .insert_header((header::AUTHORIZATION, format!("Bearer {owner}")))
            .set_json(json!({ "name": "Apollo" }))
            .to_request(),
    )
    .await;
    assert_eq!(create.status(), StatusCode::CREATED);

    let projects = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/projects")
            .insert_header((header::AUTHORIZATION, format!("Bearer {owner}")))
            .to_request(),
    )
    .await;
    let project_id = read_json(projects)
        .await
        .as_array()
        .and_then(|rows| rows.first())
        .and_then(|row| row.get("id"))
        .and_then(Value::as_i64)
        .expect("project id in listing");

    // The stranger adds a document to the owner's project.
    let create_document = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/projects/{project_id}/documents"))
            .insert_header((header::AUTHORIZATION, format!("Bearer {stranger}")))
            .set_json(json!({ "title": "Intrusion report" }))
            .to_request(),
    )
    .await;
    assert_eq!(create_document.status(), StatusCode::CREATED);

    // And deletes the project outright.
    let delete = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/projects/{project_id}"))
            .insert_header((header::AUTHORIZATION, format!("Bearer {stranger}")))
            .to_request(),
    )
    .await;
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    let projects = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/projects")
            .insert_header((header::AUTHORIZATION, format!("Bearer {owner}")))
            .to_request(),
    )
    .await;
    assert_eq!(read_json(projects).await.as_array().map(Vec::len), Some(0));
}
