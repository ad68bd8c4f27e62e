use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use pizzastore::{models::UserProfileInfo, schema::users};

use crate::helpers::TestApp;

#[actix_web::test]
async fn get_profile_returns_own_row(){
    let app = TestApp::spawn_app().await;

    app.register_and_login("alice", "pw1", "customer").await;

    let response = app.api_client
        .get(format!("{}/profile", app.get_app_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let profile: UserProfileInfo = response.json().await.unwrap();
    assert_eq!(profile.login, "alice");
    assert_eq!(profile.role, "customer");
    assert_eq!(profile.favorite_items, None);
}

#[actix_web::test]
async fn profile_requires_a_session(){
    let app = TestApp::spawn_app().await;

    let response = app.api_client
        .get(format!("{}/profile", app.get_app_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}

#[actix_web::test]
async fn update_phone_number_persists(){
    let app = TestApp::spawn_app().await;

    app.register_and_login("alice", "pw1", "customer").await;

    let body = serde_json::json!({
        "field": "phone_num",
        "value": "555-9999"
    });

    let response = app.api_client
        .post(format!("{}/profile", app.get_app_url()))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let phone_num: String = {
        let mut conn = app.pool.get().unwrap();
        users::table
            .select(users::phone_num)
            .filter(users::login.eq("alice"))
            .first(&mut conn)
            .unwrap()
    };
    assert_eq!(phone_num, "555-9999");
}

#[actix_web::test]
async fn update_favorite_items_persists(){
    let app = TestApp::spawn_app().await;

    app.register_and_login("alice", "pw1", "customer").await;

    let body = serde_json::json!({
        "field": "favorite_items",
        "value": "Cheese Pizza, Garlic Bread"
    });

    let response = app.api_client
        .post(format!("{}/profile", app.get_app_url()))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let favorite_items: Option<String> = {
        let mut conn = app.pool.get().unwrap();
        users::table
            .select(users::favorite_items)
            .filter(users::login.eq("alice"))
            .first(&mut conn)
            .unwrap()
    };
    assert_eq!(favorite_items.as_deref(), Some("Cheese Pizza, Garlic Bread"));
}

#[actix_web::test]
async fn updated_password_is_usable_on_next_login(){
    let app = TestApp::spawn_app().await;

    app.register_and_login("alice", "pw1", "customer").await;

    let body = serde_json::json!({
        "field": "password",
        "value": "pw2"
    });

    let response = app.api_client
        .post(format!("{}/profile", app.get_app_url()))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(app.login("alice", "pw1").await.status().as_u16(), 404);
    assert_eq!(app.login("alice", "pw2").await.status().as_u16(), 200);
}
