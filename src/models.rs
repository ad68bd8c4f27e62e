use chrono::{DateTime, Utc};
use diesel::prelude::{Insertable, Queryable};
use serde::Deserialize;
use serde::Serialize;

use crate::schema::food_orders;
use crate::schema::items;
use crate::schema::items_in_order;
use crate::schema::stores;
use crate::schema::users;

#[derive(Queryable, Insertable)]
#[diesel(table_name = users)]
pub struct User{
    pub login: String,
    pub password_hash: String,
    pub role: String,
    pub phone_num: String,
    pub favorite_items: Option<String>
}

// Profile view of a user, without the credential column
#[derive(Queryable, Serialize, Deserialize)]
pub struct UserProfileInfo{
    pub login: String,
    pub role: String,
    pub phone_num: String,
    pub favorite_items: Option<String>
}

#[derive(Queryable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = items)]
pub struct MenuItem{
    pub item_name: String,
    pub ingredients: String,
    pub type_of_item: String,
    pub price: f64,
    pub description: Option<String>
}

#[derive(Queryable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = stores)]
pub struct Store{
    pub store_id: i32,
    pub address: String,
    pub city: String,
    pub state: String,
    pub is_open: bool,
    pub review_score: Option<f64>
}

#[derive(Queryable, Serialize, Deserialize)]
pub struct FoodOrder{
    pub order_id: i32,
    pub login: String,
    pub store_id: i32,
    pub total_price: f64,
    pub order_timestamp: DateTime<Utc>,
    pub order_status: String
}

// order_id is sequence-assigned by the database on insert
#[derive(Insertable)]
#[diesel(table_name = food_orders)]
pub struct NewFoodOrder{
    pub login: String,
    pub store_id: i32,
    pub total_price: f64,
    pub order_timestamp: DateTime<Utc>,
    pub order_status: String
}

#[derive(Queryable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = items_in_order)]
pub struct OrderLineRow{
    pub order_id: i32,
    pub item_name: String,
    pub quantity: i32
}
