use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{
    auth::extractors::CurrentUser,
    db_interaction::{menu::delete_item, StoreError},
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Debug)]
pub struct DeleteItemQuery{
    item_name: String
}

#[tracing::instrument(
    "Manager deleting a menu item",
    skip(pool, user)
)]
pub async fn delete_item_route(
    pool: web::Data<DbPool>,
    query: web::Query<DeleteItemQuery>,
    user: CurrentUser
) -> Result<HttpResponse, StoreError> {
    let conn = get_pooled_connection(&pool).await?;

    delete_item(conn, user.0, query.0.item_name).await?;

    Ok(HttpResponse::Ok().finish())
}
