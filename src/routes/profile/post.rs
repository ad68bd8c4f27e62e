use actix_web::{web, HttpResponse};
use secrecy::SecretString;
use serde::Deserialize;

use crate::{
    auth::extractors::CurrentUser,
    db_interaction::{users::{update_profile, ProfileUpdate}, StoreError},
    utils::{get_pooled_connection, DbPool}
};

// Single field point write, mirroring the old "what would you like to
// update?" submenu
#[derive(Deserialize, Debug)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ProfileUpdateForm{
    Password(SecretString),
    PhoneNum(String),
    FavoriteItems(String)
}

#[tracing::instrument(
    "Updating profile field of logged in user",
    skip_all
)]
pub async fn post_profile(
    pool: web::Data<DbPool>,
    form: web::Json<ProfileUpdateForm>,
    user: CurrentUser
) -> Result<HttpResponse, StoreError> {
    let conn = get_pooled_connection(&pool).await?;

    let update = match form.0 {
        ProfileUpdateForm::Password(password) => ProfileUpdate::Password(password),
        ProfileUpdateForm::PhoneNum(phone_num) => ProfileUpdate::PhoneNum(phone_num),
        ProfileUpdateForm::FavoriteItems(favorite_items) => ProfileUpdate::FavoriteItems(favorite_items)
    };

    update_profile(conn, user.0, update).await?;

    Ok(HttpResponse::Ok().finish())
}
