use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{
    auth::extractors::CurrentUser,
    db_interaction::{orders::{view_order_detail, view_orders, OrderScope}, StoreError},
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Debug)]
pub struct OrdersQuery{
    scope: Option<String>
}

#[tracing::instrument(
    "Viewing order history",
    skip(pool, user)
)]
pub async fn get_orders(
    pool: web::Data<DbPool>,
    query: web::Query<OrdersQuery>,
    user: CurrentUser
) -> Result<HttpResponse, StoreError> {
    let scope = match query.scope.as_deref() {
        None | Some("all") => OrderScope::All,
        Some("recent") => OrderScope::Recent5,
        Some(other) => {
            return Err(StoreError::Validation(format!("Unknown order scope {}", other)))
        }
    };

    let conn = get_pooled_connection(&pool).await?;

    let orders = view_orders(conn, user.0, scope).await?;

    Ok(HttpResponse::Ok().json(orders))
}

#[tracing::instrument(
    "Viewing joined order details",
    skip(pool, user)
)]
pub async fn get_order_detail(
    pool: web::Data<DbPool>,
    user: CurrentUser
) -> Result<HttpResponse, StoreError> {
    let conn = get_pooled_connection(&pool).await?;

    let detail = view_order_detail(conn, user.0).await?;

    Ok(HttpResponse::Ok().json(detail))
}
