use chrono::{DateTime, Utc};
use diesel::{Connection, ExpressionMethods, JoinOnDsl, OptionalExtension, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use crate::{
    domain::OrderStatus,
    models::{FoodOrder, NewFoodOrder, OrderLineRow},
    schema::{food_orders, items, items_in_order},
    telemetry::spawn_blocking_with_tracing,
    utils::DbConnection
};

use super::{ensure_manager, resolve_role, StoreError};

// One (item, quantity) pair of a submitted order
#[derive(Serialize, Deserialize, Debug)]
pub struct OrderLine{
    pub item_name: String,
    pub quantity: i32
}

#[derive(Serialize, Deserialize)]
pub struct PlacedOrder{
    pub order_id: i32,
    pub total_price: f64
}

#[derive(Debug)]
pub enum OrderScope{
    All,
    Recent5
}

// A joined order x line row of the order detail view
#[derive(diesel::Queryable, Serialize, Deserialize)]
pub struct OrderDetailRow{
    pub order_id: i32,
    pub order_timestamp: DateTime<Utc>,
    pub total_price: f64,
    pub order_status: String,
    pub item_name: String,
    pub quantity: i32
}

// Collapses repeated item names and prices the order at current menu prices.
// The stored total is rounded to cents, matching what gets printed back to
// the customer.
fn order_total(priced_lines: &[(f64, i32)]) -> f64{
    let total: f64 = priced_lines
        .iter()
        .map(|(price, quantity)| price * (*quantity as f64))
        .sum();

    (total * 100.0).round() / 100.0
}

fn merge_lines(lines: Vec<OrderLine>) -> Vec<OrderLine>{
    let mut merged: Vec<OrderLine> = Vec::new();

    for line in lines {
        match merged.iter_mut().find(|m| m.item_name == line.item_name) {
            Some(existing) => existing.quantity += line.quantity,
            None => merged.push(line)
        }
    }

    merged
}

#[tracing::instrument(
    "Placing an order",
    skip(conn, lines),
    fields(line_count = lines.len())
)]
pub async fn place_order(
    mut conn: DbConnection,
    login: String,
    store_id: i32,
    lines: Vec<OrderLine>
) -> Result<PlacedOrder, StoreError> {

    if lines.is_empty() {
        return Err(StoreError::Validation("No items in order".to_string()))
    }

    for line in lines.iter() {
        if line.quantity <= 0 {
            return Err(StoreError::Validation(format!(
                "Quantity must be positive, got {} for {}", line.quantity, line.item_name
            )))
        }
    }

    let lines = merge_lines(lines);

    spawn_blocking_with_tracing(move || {
        use crate::schema::stores;

        conn.transaction::<PlacedOrder, StoreError, _>(|conn|{
            let is_open: Option<bool> = stores::table
                .select(stores::is_open)
                .filter(stores::store_id.eq(store_id))
                .first::<bool>(conn)
                .optional()?;

            match is_open {
                None => return Err(StoreError::NotFound(format!("Store {} does not exist", store_id))),
                Some(false) => return Err(StoreError::Unavailable(format!("Store {} is not open", store_id))),
                Some(true) => {}
            }

            // Price every line before writing anything
            let mut priced_lines = Vec::new();
            for line in lines.iter() {
                let price: Option<f64> = items::table
                    .select(items::price)
                    .filter(items::item_name.eq(&line.item_name))
                    .first::<f64>(conn)
                    .optional()?;

                match price {
                    Some(price) => priced_lines.push((price, line.quantity)),
                    None => return Err(StoreError::NotFound(format!("Item {} does not exist", line.item_name)))
                }
            }

            let total_price = order_total(&priced_lines);

            let new_order = NewFoodOrder{
                login,
                store_id,
                total_price,
                order_timestamp: Utc::now(),
                order_status: OrderStatus::Pending.as_str().to_string()
            };

            let order_id: i32 = diesel::insert_into(food_orders::table)
                .values(&new_order)
                .returning(food_orders::order_id)
                .get_result(conn)?;

            for line in lines {
                let row = OrderLineRow{
                    order_id,
                    item_name: line.item_name,
                    quantity: line.quantity
                };

                diesel::insert_into(items_in_order::table)
                    .values(row)
                    .execute(conn)?;
            }

            Ok(PlacedOrder{ order_id, total_price })
        })
    })
    .await?
}

#[tracing::instrument(
    "Viewing orders",
    skip(conn)
)]
pub async fn view_orders(
    mut conn: DbConnection,
    login: String,
    scope: OrderScope
) -> Result<Vec<FoodOrder>, StoreError> {

    spawn_blocking_with_tracing(move || {
        let role = resolve_role(&mut conn, &login)?;

        let mut query = food_orders::table.into_boxed();

        if !role.sees_all_orders() {
            query = query.filter(food_orders::login.eq(login));
        }

        query = match scope {
            OrderScope::All => query.order(food_orders::order_id.asc()),
            OrderScope::Recent5 => {
                query.order(food_orders::order_timestamp.desc()).limit(5)
            }
        };

        let res = query.load::<FoodOrder>(&mut conn)?;

        Ok(res)
    })
    .await?
}

#[tracing::instrument(
    "Viewing joined order details",
    skip(conn)
)]
pub async fn view_order_detail(
    mut conn: DbConnection,
    login: String
) -> Result<Vec<OrderDetailRow>, StoreError> {

    spawn_blocking_with_tracing(move || {
        let role = resolve_role(&mut conn, &login)?;

        let mut query = items_in_order::table
            .inner_join(food_orders::table.on(food_orders::order_id.eq(items_in_order::order_id)))
            .select((
                food_orders::order_id,
                food_orders::order_timestamp,
                food_orders::total_price,
                food_orders::order_status,
                items_in_order::item_name,
                items_in_order::quantity
            ))
            .into_boxed();

        if !role.sees_all_orders() {
            query = query.filter(food_orders::login.eq(login));
        }

        let res = query
            .order((food_orders::order_id.asc(), items_in_order::item_name.asc()))
            .load::<OrderDetailRow>(&mut conn)?;

        Ok(res)
    })
    .await?
}

#[tracing::instrument(
    "Manager updating order status",
    skip(conn)
)]
pub async fn update_order_status(
    mut conn: DbConnection,
    acting_login: String,
    order_id: i32,
    new_status: OrderStatus
) -> Result<(), StoreError> {

    spawn_blocking_with_tracing(move || {
        conn.transaction::<(), StoreError, _>(|conn| {
            ensure_manager(conn, &acting_login)?;

            let affected_rows = diesel::update(food_orders::table)
                .filter(food_orders::order_id.eq(order_id))
                .set(food_orders::order_status.eq(new_status.as_str()))
                .execute(conn)?;

            if affected_rows == 0 {
                return Err(StoreError::NotFound(format!("Order {} does not exist", order_id)))
            }

            Ok(())
        })
    })
    .await?
}

#[tracing::instrument(
    "Manager updating order timestamp",
    skip(conn)
)]
pub async fn update_order_timestamp(
    mut conn: DbConnection,
    acting_login: String,
    order_id: i32,
    new_timestamp: DateTime<Utc>
) -> Result<(), StoreError> {

    spawn_blocking_with_tracing(move || {
        conn.transaction::<(), StoreError, _>(|conn| {
            ensure_manager(conn, &acting_login)?;

            let affected_rows = diesel::update(food_orders::table)
                .filter(food_orders::order_id.eq(order_id))
                .set(food_orders::order_timestamp.eq(new_timestamp))
                .execute(conn)?;

            if affected_rows == 0 {
                return Err(StoreError::NotFound(format!("Order {} does not exist", order_id)))
            }

            Ok(())
        })
    })
    .await?
}
