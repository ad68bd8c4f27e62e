use diesel::{Connection, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl};

use crate::{
    domain::ItemType,
    models::MenuItem,
    schema::{items, items_in_order},
    telemetry::spawn_blocking_with_tracing,
    utils::DbConnection
};

use super::{ensure_manager, StoreError};

// Menu listing modes, one per browse action of the menu screen
pub enum MenuFilter{
    All,
    ByType(ItemType),
    ByMaxPrice(f64),
    PriceAsc,
    PriceDesc
}

// Which single item field a manager update targets
pub enum ItemUpdate{
    Ingredients(String),
    TypeOfItem(ItemType),
    Price(f64),
    Description(String)
}

fn validate_price(price: f64) -> Result<(), StoreError>{
    if price > 0.0 {
        Ok(())
    } else {
        Err(StoreError::Validation(format!("Price must be positive, got {}", price)))
    }
}

#[tracing::instrument(
    "Listing menu items",
    skip_all
)]
pub async fn list_menu(
    mut conn: DbConnection,
    filter: MenuFilter
) -> Result<Vec<MenuItem>, StoreError>{

    spawn_blocking_with_tracing(move || {
        let mut query = items::table.into_boxed();

        query = match filter {
            MenuFilter::All => {
                query.order((items::type_of_item.asc(), items::item_name.asc()))
            },
            MenuFilter::ByType(type_of_item) => {
                query
                    .filter(items::type_of_item.eq(type_of_item.as_str()))
                    .order(items::item_name.asc())
            },
            MenuFilter::ByMaxPrice(max_price) => {
                query
                    .filter(items::price.le(max_price))
                    .order((items::type_of_item.asc(), items::item_name.asc()))
            },
            MenuFilter::PriceAsc => query.order(items::price.asc()),
            MenuFilter::PriceDesc => query.order(items::price.desc())
        };

        let res = query.load::<MenuItem>(&mut conn)?;

        Ok(res)
    })
    .await?
}

#[tracing::instrument(
    "Manager adding a menu item",
    skip(conn, item),
    fields(item_name = %item.item_name)
)]
pub async fn add_item(
    mut conn: DbConnection,
    acting_login: String,
    item: MenuItem
) -> Result<(), StoreError>{
    validate_price(item.price)?;

    spawn_blocking_with_tracing(move || {
        conn.transaction::<(), StoreError, _>(|conn| {
            ensure_manager(conn, &acting_login)?;

            diesel::insert_into(items::table)
                .values(&item)
                .execute(conn)
                .map_err(|e|{
                    match e {
                        diesel::result::Error::DatabaseError(
                            diesel::result::DatabaseErrorKind::UniqueViolation,
                            ref _a
                        ) => {
                            StoreError::Conflict(format!("Item {} already exists", item.item_name))
                        },

                        _ => StoreError::Database(e)
                    }
                })?;

            Ok(())
        })
    })
    .await?
}

#[tracing::instrument(
    "Manager updating a menu item field",
    skip(conn, update)
)]
pub async fn update_item(
    mut conn: DbConnection,
    acting_login: String,
    item_name: String,
    update: ItemUpdate
) -> Result<(), StoreError>{
    if let ItemUpdate::Price(price) = &update {
        validate_price(*price)?;
    }

    spawn_blocking_with_tracing(move || {
        conn.transaction::<(), StoreError, _>(|conn| {
            ensure_manager(conn, &acting_login)?;

            let target = diesel::update(items::table).filter(items::item_name.eq(&item_name));

            let affected_rows = match update {
                ItemUpdate::Ingredients(ingredients) => {
                    target.set(items::ingredients.eq(ingredients)).execute(conn)?
                },
                ItemUpdate::TypeOfItem(type_of_item) => {
                    target.set(items::type_of_item.eq(type_of_item.as_str())).execute(conn)?
                },
                ItemUpdate::Price(price) => {
                    target.set(items::price.eq(price)).execute(conn)?
                },
                ItemUpdate::Description(description) => {
                    target.set(items::description.eq(description)).execute(conn)?
                }
            };

            if affected_rows == 0 {
                return Err(StoreError::NotFound(format!("Item {} does not exist", item_name)))
            }

            Ok(())
        })
    })
    .await?
}

#[tracing::instrument(
    "Manager deleting a menu item",
    skip(conn)
)]
pub async fn delete_item(
    mut conn: DbConnection,
    acting_login: String,
    item_name: String
) -> Result<(), StoreError>{

    spawn_blocking_with_tracing(move || {
        conn.transaction::<(), StoreError, _>(|conn| {
            ensure_manager(conn, &acting_login)?;

            let exists: Option<String> = items::table
                .select(items::item_name)
                .filter(items::item_name.eq(&item_name))
                .first::<String>(conn)
                .optional()?;

            if exists.is_none() {
                return Err(StoreError::NotFound(format!("Item {} does not exist", item_name)))
            }

            // An item that appears in any order line stays, otherwise order
            // history would dangle
            let references: i64 = items_in_order::table
                .filter(items_in_order::item_name.eq(&item_name))
                .count()
                .get_result(conn)?;

            if references > 0 {
                return Err(StoreError::Conflict(format!(
                    "Item {} is referenced by {} order line(s) and cannot be deleted", item_name, references
                )))
            }

            diesel::delete(items::table)
                .filter(items::item_name.eq(&item_name))
                .execute(conn)?;

            Ok(())
        })
    })
    .await?
}
