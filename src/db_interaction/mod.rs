use std::{error::Error, fmt::Debug};

use actix_web::{HttpResponse, ResponseError};
use diesel::{ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl};
use thiserror::Error;

use crate::{domain::Role, utils::error_fmt_chain};

pub mod menu;
pub mod orders;
pub mod stores;
pub mod users;

// Every store operation fails with one of these kinds plus a human readable
// message. The last three variants are infrastructure failures, not part of
// the operation contracts.
#[derive(Error)]
pub enum StoreError{
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error("Access denied: {0}")]
    AccessDenied(String),
    #[error("{0}")]
    Unavailable(String),
    #[error("Failed to run query")]
    Database(#[from] diesel::result::Error),
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Unexpected error occured")]
    Unexpected(#[from] anyhow::Error)
}

impl Debug for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for StoreError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Conflict(_) => StatusCode::CONFLICT,
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::AccessDenied(_) => StatusCode::FORBIDDEN,
            StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            StoreError::Database(_)
            | StoreError::ThreadpoolError(_)
            | StoreError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).body(format!("{}", self))
    }
}

// Resolve the stored role for a login, shared by every role gated operation
pub fn resolve_role(conn: &mut PgConnection, login: &str) -> Result<Role, StoreError>{
    use crate::schema::users;

    let role: Option<String> = users::table
        .select(users::role)
        .filter(users::login.eq(login))
        .first::<String>(conn)
        .optional()?;

    match role {
        Some(role) => {
            Role::parse(&role)
                .map_err(|e| StoreError::Unexpected(anyhow::anyhow!("Stored role failed to parse: {}", e)))
        },
        None => Err(StoreError::NotFound(format!("User {} does not exist", login)))
    }
}

// The single manager gate; the old front end re-queried the role inline in
// every manager operation.
pub fn ensure_manager(conn: &mut PgConnection, login: &str) -> Result<(), StoreError>{
    let role = resolve_role(conn, login)?;

    if role != Role::Manager {
        return Err(StoreError::AccessDenied(format!(
            "Only managers may perform this operation, {} is a {}", login, role
        )))
    }

    Ok(())
}
