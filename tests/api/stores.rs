use pizzastore::models::Store;

use crate::helpers::TestApp;

#[actix_web::test]
async fn stores_listing_includes_closed_stores(){
    let app = TestApp::spawn_app().await;
    app.seed_store(1, true);
    app.seed_store(2, false);

    let response = app.api_client
        .get(format!("{}/stores", app.get_app_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let stores: Vec<Store> = response.json().await.unwrap();
    assert_eq!(stores.len(), 2);
    assert_eq!(stores[0].store_id, 1);
    assert_eq!(stores[1].store_id, 2);
    assert!(!stores[1].is_open);
}

#[actix_web::test]
async fn open_stores_listing_filters_closed_stores(){
    let app = TestApp::spawn_app().await;
    app.seed_store(1, true);
    app.seed_store(2, false);
    app.seed_store(3, true);

    let response = app.api_client
        .get(format!("{}/stores/open", app.get_app_url()))
        .send()
        .await
        .unwrap();

    let stores: Vec<Store> = response.json().await.unwrap();
    let ids: Vec<i32> = stores.iter().map(|s| s.store_id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[actix_web::test]
async fn empty_store_roster_is_an_empty_list(){
    let app = TestApp::spawn_app().await;

    let response = app.api_client
        .get(format!("{}/stores", app.get_app_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let stores: Vec<Store> = response.json().await.unwrap();
    assert!(stores.is_empty());
}
