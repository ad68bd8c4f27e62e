use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{
    db_interaction::{menu::{list_menu, MenuFilter}, StoreError},
    domain::ItemType,
    utils::{get_pooled_connection, DbPool}
};

#[derive(Deserialize, Debug)]
pub struct MenuQuery{
    type_of_item: Option<String>,
    max_price: Option<f64>,
    sort: Option<String>
}

impl MenuQuery{
    fn to_filter(&self) -> Result<MenuFilter, StoreError>{
        if let Some(type_of_item) = &self.type_of_item {
            let type_of_item = ItemType::parse(type_of_item).map_err(StoreError::Validation)?;
            return Ok(MenuFilter::ByType(type_of_item))
        }

        if let Some(max_price) = self.max_price {
            return Ok(MenuFilter::ByMaxPrice(max_price))
        }

        match self.sort.as_deref() {
            Some("asc") => Ok(MenuFilter::PriceAsc),
            Some("desc") => Ok(MenuFilter::PriceDesc),
            Some(other) => Err(StoreError::Validation(format!("Unknown sort order {}", other))),
            None => Ok(MenuFilter::All)
        }
    }
}

#[tracing::instrument(
    "Listing the menu",
    skip(pool)
)]
pub async fn get_menu(
    pool: web::Data<DbPool>,
    query: web::Query<MenuQuery>
) -> Result<HttpResponse, StoreError> {
    let filter = query.to_filter()?;

    let conn = get_pooled_connection(&pool).await?;

    let menu = list_menu(conn, filter).await?;

    Ok(HttpResponse::Ok().json(menu))
}
