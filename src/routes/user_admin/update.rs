use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{
    auth::extractors::CurrentUser,
    db_interaction::{users::{rename_login, update_user_role}, StoreError},
    domain::Role,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Debug)]
pub struct UpdateRoleForm{
    pub login: String,
    pub role: String
}

#[derive(Deserialize, Debug)]
pub struct RenameLoginForm{
    pub login: String,
    pub new_login: String
}

#[tracing::instrument(
    "Manager updating a user role",
    skip(pool, user)
)]
pub async fn post_user_role(
    pool: web::Data<DbPool>,
    form: web::Json<UpdateRoleForm>,
    user: CurrentUser
) -> Result<HttpResponse, StoreError>{
    let role = Role::parse(&form.role).map_err(StoreError::Validation)?;

    let conn = get_pooled_connection(&pool).await?;

    update_user_role(conn, user.0, form.0.login, role).await?;

    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(
    "Manager renaming a user login",
    skip(pool, user)
)]
pub async fn post_user_login(
    pool: web::Data<DbPool>,
    form: web::Json<RenameLoginForm>,
    user: CurrentUser
) -> Result<HttpResponse, StoreError>{
    if form.new_login.trim().is_empty() {
        return Err(StoreError::Validation("New login must not be empty".to_string()))
    }

    let conn = get_pooled_connection(&pool).await?;

    rename_login(conn, user.0, form.0.login, form.0.new_login).await?;

    Ok(HttpResponse::Ok().finish())
}
