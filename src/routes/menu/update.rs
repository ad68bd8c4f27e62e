use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{
    auth::extractors::CurrentUser,
    db_interaction::{menu::{update_item, ItemUpdate}, StoreError},
    domain::ItemType,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Debug)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ItemUpdateField{
    Ingredients(String),
    TypeOfItem(String),
    Price(f64),
    Description(String)
}

#[derive(Deserialize, Debug)]
pub struct UpdateItemForm{
    item_name: String,
    #[serde(flatten)]
    update: ItemUpdateField
}

#[tracing::instrument(
    "Manager updating a menu item",
    skip(pool, form, user),
    fields(item_name = %form.item_name)
)]
pub async fn put_item(
    pool: web::Data<DbPool>,
    form: web::Json<UpdateItemForm>,
    user: CurrentUser
) -> Result<HttpResponse, StoreError> {
    let update = match form.0.update {
        ItemUpdateField::Ingredients(ingredients) => ItemUpdate::Ingredients(ingredients),
        ItemUpdateField::TypeOfItem(type_of_item) => {
            ItemUpdate::TypeOfItem(ItemType::parse(&type_of_item).map_err(StoreError::Validation)?)
        },
        ItemUpdateField::Price(price) => ItemUpdate::Price(price),
        ItemUpdateField::Description(description) => ItemUpdate::Description(description)
    };

    let conn = get_pooled_connection(&pool).await?;

    update_item(conn, user.0, form.0.item_name, update).await?;

    Ok(HttpResponse::Ok().finish())
}
