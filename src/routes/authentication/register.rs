use actix_web::{web, HttpResponse};
use secrecy::SecretString;
use serde::Deserialize;

use crate::{
    db_interaction::{users::{register_user, NewUser}, StoreError},
    domain::Role,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Debug)]
pub struct RegistrationForm{
    login: String,
    password: SecretString,
    phone_num: String,
    role: String
}

#[tracing::instrument(
    "User registration started",
    skip(pool, form),
    fields(login = %form.login)
)]
pub async fn register(
    pool: web::Data<DbPool>,
    form: web::Form<RegistrationForm>
) -> Result<HttpResponse, StoreError> {

    let role = Role::parse(&form.role).map_err(StoreError::Validation)?;

    if form.login.trim().is_empty() {
        return Err(StoreError::Validation("Login must not be empty".to_string()))
    }

    let conn = get_pooled_connection(&pool).await?;

    let new_user = NewUser{
        login: form.0.login,
        password: form.0.password,
        phone_num: form.0.phone_num,
        role
    };

    register_user(conn, new_user).await?;

    Ok(HttpResponse::Ok().finish())
}
