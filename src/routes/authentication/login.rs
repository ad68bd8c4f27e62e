use actix_web::{error::ErrorInternalServerError, web, HttpResponse};
use anyhow::Context;
use secrecy::SecretString;
use serde::Deserialize;

use crate::{
    db_interaction::users::authenticate,
    session_state::TypedSession,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Debug)]
pub struct LoginForm{
    pub login: String,
    pub password: SecretString
}

#[tracing::instrument(
    "Logging in user",
    skip(pool, form, session),
    fields(login = %form.login)
)]
pub async fn login(
    pool: web::Data<DbPool>,
    form: web::Form<LoginForm>,
    session: TypedSession
) -> Result<HttpResponse, actix_web::Error>{
    let conn = get_pooled_connection(&pool).await?;

    let login = authenticate(conn, form.0.login, form.0.password).await?;

    session.renew();
    session.insert_login(&login)
        .context("Failed to insert login into session")
        .map_err(ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(login))
}
