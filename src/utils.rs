use std::error::Error;

use actix_web::web;
use diesel::{r2d2::ConnectionManager, PgConnection};
use r2d2::{Pool, PooledConnection};

use crate::{db_interaction::StoreError, telemetry::spawn_blocking_with_tracing};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

pub fn error_fmt_chain(f: &mut std::fmt::Formatter<'_>, source: &Option<impl Error>) -> std::fmt::Result{
    if let Some(error) = source{
        write!(f, "\n\tCaused By:\n\t")?;
        write!(f, "{:?}", &error)?;
        error_fmt_chain(f, &error.source())
    } else {
        Ok(())
    }
}

// Checking out a pooled connection can block when the pool is exhausted
pub async fn get_pooled_connection(
    pool: &web::Data<DbPool>
) -> Result<DbConnection, StoreError>{
    let pool_clone = pool.clone();

    let res = spawn_blocking_with_tracing(move || {
        pool_clone.get()
    })
    .await?
    .map_err(|e| StoreError::Unexpected(anyhow::anyhow!(e).context("Failed to get connection from pool")))?;

    Ok(res)
}
