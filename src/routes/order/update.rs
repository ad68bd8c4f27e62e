use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    auth::extractors::CurrentUser,
    db_interaction::{orders::{update_order_status, update_order_timestamp}, StoreError},
    domain::OrderStatus,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Debug)]
pub struct UpdateOrderStatusForm{
    pub order_id: i32,
    pub status: String
}

#[derive(Deserialize, Debug)]
pub struct UpdateOrderTimestampForm{
    pub order_id: i32,
    pub timestamp: DateTime<Utc>
}

#[tracing::instrument(
    "Updating order status",
    skip(pool, user)
)]
pub async fn post_order_status(
    pool: web::Data<DbPool>,
    form: web::Json<UpdateOrderStatusForm>,
    user: CurrentUser
) -> Result<HttpResponse, StoreError>{
    let status = OrderStatus::parse(&form.status).map_err(StoreError::Validation)?;

    let conn = get_pooled_connection(&pool).await?;

    update_order_status(conn, user.0, form.order_id, status).await?;

    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(
    "Updating order timestamp",
    skip(pool, user)
)]
pub async fn post_order_timestamp(
    pool: web::Data<DbPool>,
    form: web::Json<UpdateOrderTimestampForm>,
    user: CurrentUser
) -> Result<HttpResponse, StoreError>{
    let conn = get_pooled_connection(&pool).await?;

    update_order_timestamp(conn, user.0, form.order_id, form.timestamp).await?;

    Ok(HttpResponse::Ok().finish())
}
