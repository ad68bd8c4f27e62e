use actix_web::{web, HttpResponse};

use crate::{
    db_interaction::{stores::{list_open_stores, list_stores}, StoreError},
    utils::{get_pooled_connection, DbPool}
};

#[tracing::instrument(
    "Listing all stores",
    skip(pool)
)]
pub async fn get_stores(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, StoreError> {
    let conn = get_pooled_connection(&pool).await?;

    let stores = list_stores(conn).await?;

    Ok(HttpResponse::Ok().json(stores))
}

#[tracing::instrument(
    "Listing open stores",
    skip(pool)
)]
pub async fn get_open_stores(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, StoreError> {
    let conn = get_pooled_connection(&pool).await?;

    let stores = list_open_stores(conn).await?;

    Ok(HttpResponse::Ok().json(stores))
}
