use actix_web::{web, HttpResponse};

use crate::{
    auth::extractors::CurrentUser,
    db_interaction::{users::get_profile, StoreError},
    utils::{get_pooled_connection, DbPool}
};

#[tracing::instrument(
    "Get profile of logged in user",
    skip(pool, user)
)]
pub async fn get_own_profile(
    pool: web::Data<DbPool>,
    user: CurrentUser
) -> Result<HttpResponse, StoreError> {
    let conn = get_pooled_connection(&pool).await?;

    let profile = get_profile(conn, user.0).await?;

    Ok(HttpResponse::Ok().json(profile))
}
