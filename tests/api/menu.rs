use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use pizzastore::{models::MenuItem, schema::items};

use crate::helpers::TestApp;

#[actix_web::test]
async fn menu_lists_items_grouped_by_type(){
    let app = TestApp::spawn_app().await;
    app.seed_item("Cheese Pizza", "entree", 9.99);
    app.seed_item("Soda", "drinks", 2.50);
    app.seed_item("Garlic Bread", "sides", 4.25);

    let response = app.api_client
        .get(format!("{}/menu", app.get_app_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let menu: Vec<MenuItem> = response.json().await.unwrap();
    let names: Vec<&str> = menu.iter().map(|i| i.item_name.as_str()).collect();
    // type_of_item then item_name: drinks < entree < sides
    assert_eq!(names, vec!["Soda", "Cheese Pizza", "Garlic Bread"]);
}

#[actix_web::test]
async fn menu_filters_by_type(){
    let app = TestApp::spawn_app().await;
    app.seed_item("Cheese Pizza", "entree", 9.99);
    app.seed_item("Soda", "drinks", 2.50);

    let response = app.api_client
        .get(format!("{}/menu?type_of_item=drinks", app.get_app_url()))
        .send()
        .await
        .unwrap();

    let menu: Vec<MenuItem> = response.json().await.unwrap();
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].item_name, "Soda");
}

#[actix_web::test]
async fn menu_filters_by_max_price(){
    let app = TestApp::spawn_app().await;
    app.seed_item("Cheese Pizza", "entree", 9.99);
    app.seed_item("Soda", "drinks", 2.50);
    app.seed_item("Garlic Bread", "sides", 4.25);

    let response = app.api_client
        .get(format!("{}/menu?max_price=5.0", app.get_app_url()))
        .send()
        .await
        .unwrap();

    let menu: Vec<MenuItem> = response.json().await.unwrap();
    let names: Vec<&str> = menu.iter().map(|i| i.item_name.as_str()).collect();
    assert_eq!(names, vec!["Soda", "Garlic Bread"]);
}

#[actix_web::test]
async fn menu_sorts_by_price(){
    let app = TestApp::spawn_app().await;
    app.seed_item("Cheese Pizza", "entree", 9.99);
    app.seed_item("Soda", "drinks", 2.50);

    let asc: Vec<MenuItem> = app.api_client
        .get(format!("{}/menu?sort=asc", app.get_app_url()))
        .send().await.unwrap()
        .json().await.unwrap();
    assert_eq!(asc[0].item_name, "Soda");

    let desc: Vec<MenuItem> = app.api_client
        .get(format!("{}/menu?sort=desc", app.get_app_url()))
        .send().await.unwrap()
        .json().await.unwrap();
    assert_eq!(desc[0].item_name, "Cheese Pizza");
}

#[actix_web::test]
async fn manager_can_add_a_menu_item(){
    let app = TestApp::spawn_app().await;
    app.register_and_login("mallory", "pw", "manager").await;

    let body = serde_json::json!({
        "item_name": "Veggie Pizza",
        "ingredients": "dough, tomato, peppers",
        "type_of_item": "entree",
        "price": 11.50,
        "description": "For the herbivores"
    });

    let response = app.api_client
        .post(format!("{}/menu/item", app.get_app_url()))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let count: i64 = {
        let mut conn = app.pool.get().unwrap();
        items::table
            .filter(items::item_name.eq("Veggie Pizza"))
            .count()
            .get_result(&mut conn)
            .unwrap()
    };
    assert_eq!(count, 1);
}

#[actix_web::test]
async fn adding_a_duplicate_item_is_a_conflict(){
    let app = TestApp::spawn_app().await;
    app.register_and_login("mallory", "pw", "manager").await;
    app.seed_item("Cheese Pizza", "entree", 9.99);

    let body = serde_json::json!({
        "item_name": "Cheese Pizza",
        "ingredients": "dough, cheese",
        "type_of_item": "entree",
        "price": 8.00,
        "description": null
    });

    let response = app.api_client
        .post(format!("{}/menu/item", app.get_app_url()))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 409);
}

#[actix_web::test]
async fn non_manager_cannot_touch_the_menu(){
    let app = TestApp::spawn_app().await;
    app.register_and_login("alice", "pw", "customer").await;
    app.seed_item("Cheese Pizza", "entree", 9.99);

    let body = serde_json::json!({
        "item_name": "Free Pizza",
        "ingredients": "dough",
        "type_of_item": "entree",
        "price": 0.01,
        "description": null
    });

    let post_response = app.api_client
        .post(format!("{}/menu/item", app.get_app_url()))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(post_response.status().as_u16(), 403);

    let delete_response = app.api_client
        .delete(format!("{}/menu/item?item_name=Cheese%20Pizza", app.get_app_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_response.status().as_u16(), 403);

    // The gated row is untouched
    let count: i64 = {
        let mut conn = app.pool.get().unwrap();
        items::table.count().get_result(&mut conn).unwrap()
    };
    assert_eq!(count, 1);
}

#[actix_web::test]
async fn non_positive_price_is_rejected(){
    let app = TestApp::spawn_app().await;
    app.register_and_login("mallory", "pw", "manager").await;

    let body = serde_json::json!({
        "item_name": "Paid To Eat Pizza",
        "ingredients": "dough",
        "type_of_item": "entree",
        "price": -1.0,
        "description": null
    });

    let response = app.api_client
        .post(format!("{}/menu/item", app.get_app_url()))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[actix_web::test]
async fn manager_can_update_an_item_price(){
    let app = TestApp::spawn_app().await;
    app.register_and_login("mallory", "pw", "manager").await;
    app.seed_item("Cheese Pizza", "entree", 9.99);

    let body = serde_json::json!({
        "item_name": "Cheese Pizza",
        "field": "price",
        "value": 10.99
    });

    let response = app.api_client
        .put(format!("{}/menu/item", app.get_app_url()))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let price: f64 = {
        let mut conn = app.pool.get().unwrap();
        items::table
            .select(items::price)
            .filter(items::item_name.eq("Cheese Pizza"))
            .first(&mut conn)
            .unwrap()
    };
    assert_eq!(price, 10.99);
}

#[actix_web::test]
async fn updating_a_missing_item_is_not_found(){
    let app = TestApp::spawn_app().await;
    app.register_and_login("mallory", "pw", "manager").await;

    let body = serde_json::json!({
        "item_name": "Ghost Pizza",
        "field": "ingredients",
        "value": "ectoplasm"
    });

    let response = app.api_client
        .put(format!("{}/menu/item", app.get_app_url()))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn manager_can_delete_an_unreferenced_item(){
    let app = TestApp::spawn_app().await;
    app.register_and_login("mallory", "pw", "manager").await;
    app.seed_item("Soda", "drinks", 2.50);

    let response = app.api_client
        .delete(format!("{}/menu/item?item_name=Soda", app.get_app_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let count: i64 = {
        let mut conn = app.pool.get().unwrap();
        items::table.count().get_result(&mut conn).unwrap()
    };
    assert_eq!(count, 0);
}

#[actix_web::test]
async fn deleting_an_ordered_item_is_a_conflict(){
    let app = TestApp::spawn_app().await;
    app.seed_store(1, true);
    app.seed_item("Cheese Pizza", "entree", 9.99);

    app.register_and_login("alice", "pw", "customer").await;

    let order = serde_json::json!({
        "store_id": 1,
        "items": [{ "item_name": "Cheese Pizza", "quantity": 1 }]
    });
    let order_response = app.api_client
        .post(format!("{}/order", app.get_app_url()))
        .json(&order)
        .send()
        .await
        .unwrap();
    assert_eq!(order_response.status().as_u16(), 200);

    app.api_client.post(format!("{}/logout", app.get_app_url())).send().await.unwrap();
    app.register_and_login("mallory", "pw", "manager").await;

    let response = app.api_client
        .delete(format!("{}/menu/item?item_name=Cheese%20Pizza", app.get_app_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 409);

    // No deletion happened
    let count: i64 = {
        let mut conn = app.pool.get().unwrap();
        items::table
            .filter(items::item_name.eq("Cheese Pizza"))
            .count()
            .get_result(&mut conn)
            .unwrap()
    };
    assert_eq!(count, 1);
}
