use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{
    auth::extractors::CurrentUser,
    db_interaction::{menu::add_item, StoreError},
    domain::ItemType,
    models::MenuItem,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Debug)]
pub struct NewItemForm{
    item_name: String,
    ingredients: String,
    type_of_item: String,
    price: f64,
    description: Option<String>
}

#[tracing::instrument(
    "Manager adding a menu item",
    skip(pool, form, user),
    fields(item_name = %form.item_name)
)]
pub async fn post_item(
    pool: web::Data<DbPool>,
    form: web::Json<NewItemForm>,
    user: CurrentUser
) -> Result<HttpResponse, StoreError> {
    let type_of_item = ItemType::parse(&form.type_of_item).map_err(StoreError::Validation)?;

    let item = MenuItem{
        item_name: form.0.item_name,
        ingredients: form.0.ingredients,
        type_of_item: type_of_item.as_str().to_string(),
        price: form.0.price,
        description: form.0.description
    };

    let conn = get_pooled_connection(&pool).await?;

    add_item(conn, user.0, item).await?;

    Ok(HttpResponse::Ok().finish())
}
