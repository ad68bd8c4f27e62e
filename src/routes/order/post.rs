use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{
    auth::extractors::CurrentUser,
    db_interaction::{orders::{place_order, OrderLine}, StoreError},
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Debug)]
pub struct PlaceOrderForm{
    store_id: i32,
    items: Vec<OrderLine>
}

#[tracing::instrument(
    "Posting order",
    skip(pool, form, user),
    fields(store_id = %form.store_id)
)]
pub async fn post_order(
    pool: web::Data<DbPool>,
    form: web::Json<PlaceOrderForm>,
    user: CurrentUser
) -> Result<HttpResponse, StoreError> {
    let conn = get_pooled_connection(&pool).await?;

    let placed = place_order(conn, user.0, form.0.store_id, form.0.items).await?;

    Ok(HttpResponse::Ok().json(placed))
}
