use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};

use crate::{models::Store, schema::stores, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

use super::StoreError;

// The store roster has no create or update path here; stores are provisioned
// directly in the database.

#[tracing::instrument(
    "Listing all stores",
    skip_all
)]
pub async fn list_stores(
    mut conn: DbConnection
) -> Result<Vec<Store>, StoreError>{

    spawn_blocking_with_tracing(move || {
        let res = stores::table
            .order(stores::store_id.asc())
            .load::<Store>(&mut conn)?;

        Ok(res)
    })
    .await?
}

#[tracing::instrument(
    "Listing open stores",
    skip_all
)]
pub async fn list_open_stores(
    mut conn: DbConnection
) -> Result<Vec<Store>, StoreError>{

    spawn_blocking_with_tracing(move || {
        let res = stores::table
            .filter(stores::is_open.eq(true))
            .order(stores::store_id.asc())
            .load::<Store>(&mut conn)?;

        Ok(res)
    })
    .await?
}
