use anyhow::Context;
use diesel::{Connection, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    domain::Role,
    models::{User, UserProfileInfo},
    password::{compute_password_hash, verify_password_hash},
    schema::{food_orders, users},
    telemetry::spawn_blocking_with_tracing,
    utils::DbConnection
};

use super::{ensure_manager, StoreError};

pub struct NewUser{
    pub login: String,
    pub password: SecretString,
    pub phone_num: String,
    pub role: Role
}

// Which single profile field a point write targets
pub enum ProfileUpdate{
    Password(SecretString),
    PhoneNum(String),
    FavoriteItems(String)
}

#[tracing::instrument(
    "Inserting user into the database",
    skip(conn, new_user),
    fields(login = %new_user.login)
)]
pub async fn register_user(
    mut conn: DbConnection,
    new_user: NewUser
) -> Result<(), StoreError> {

    spawn_blocking_with_tracing(move || {
        let password_hash = compute_password_hash(new_user.password)?;

        let user = User{
            login: new_user.login,
            password_hash: password_hash.expose_secret().to_string(),
            role: new_user.role.as_str().to_string(),
            phone_num: new_user.phone_num,
            favorite_items: None
        };

        diesel::insert_into(users::table)
            .values(&user)
            .execute(&mut conn)
            .map_err(|e|{
                match e {
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::UniqueViolation,
                        ref _a
                    ) => {
                        StoreError::Conflict(format!("Login {} already exists", user.login))
                    },

                    _ => StoreError::Database(e)
                }
            })?;

        Ok(())
    })
    .await?
}

#[tracing::instrument(
    "Checking login credentials",
    skip(conn, password)
)]
pub async fn authenticate(
    mut conn: DbConnection,
    login: String,
    password: SecretString
) -> Result<String, StoreError> {

    spawn_blocking_with_tracing(move || {
        let stored_hash: Option<String> = users::table
            .select(users::password_hash)
            .filter(users::login.eq(&login))
            .first::<String>(&mut conn)
            .optional()?;

        // Unknown login and wrong password are indistinguishable to the caller
        let not_found = || StoreError::NotFound("Invalid login or password".to_string());

        let stored_hash = stored_hash.ok_or_else(not_found)?;

        if verify_password_hash(&password, &stored_hash)
            .context("Failed to verify password")?
        {
            Ok(login)
        } else {
            Err(not_found())
        }
    })
    .await?
}

#[tracing::instrument(
    "Get profile data of a user",
    skip(conn)
)]
pub async fn get_profile(
    mut conn: DbConnection,
    login: String
) -> Result<UserProfileInfo, StoreError>{

    spawn_blocking_with_tracing(move || {
        users::table
            .select((
                users::login,
                users::role,
                users::phone_num,
                users::favorite_items
            ))
            .filter(users::login.eq(&login))
            .first::<UserProfileInfo>(&mut conn)
            .optional()?
            .ok_or_else(|| StoreError::NotFound(format!("User {} does not exist", login)))
    })
    .await?
}

#[tracing::instrument(
    "Updating a single profile field",
    skip_all,
    fields(login = %login)
)]
pub async fn update_profile(
    mut conn: DbConnection,
    login: String,
    update: ProfileUpdate
) -> Result<(), StoreError>{

    spawn_blocking_with_tracing(move || {
        let affected_rows = match update {
            ProfileUpdate::Password(password) => {
                let password_hash = compute_password_hash(password)?;

                diesel::update(users::table)
                    .filter(users::login.eq(&login))
                    .set(users::password_hash.eq(password_hash.expose_secret().to_string()))
                    .execute(&mut conn)?
            },
            ProfileUpdate::PhoneNum(phone_num) => {
                diesel::update(users::table)
                    .filter(users::login.eq(&login))
                    .set(users::phone_num.eq(phone_num))
                    .execute(&mut conn)?
            },
            ProfileUpdate::FavoriteItems(favorite_items) => {
                diesel::update(users::table)
                    .filter(users::login.eq(&login))
                    .set(users::favorite_items.eq(favorite_items))
                    .execute(&mut conn)?
            }
        };

        if affected_rows == 0 {
            return Err(StoreError::NotFound(format!("User {} does not exist", login)))
        }

        Ok(())
    })
    .await?
}

#[tracing::instrument(
    "Manager updating a user role",
    skip(conn)
)]
pub async fn update_user_role(
    mut conn: DbConnection,
    acting_login: String,
    target_login: String,
    new_role: Role
) -> Result<(), StoreError>{

    spawn_blocking_with_tracing(move || {
        conn.transaction::<(), StoreError, _>(|conn| {
            ensure_manager(conn, &acting_login)?;

            let affected_rows = diesel::update(users::table)
                .filter(users::login.eq(&target_login))
                .set(users::role.eq(new_role.as_str()))
                .execute(conn)?;

            if affected_rows == 0 {
                return Err(StoreError::NotFound(format!("User {} does not exist", target_login)))
            }

            Ok(())
        })
    })
    .await?
}

// Renames a login and carries the rename over to that user's orders. Both
// updates commit together; the login foreign key on food_orders is deferred
// until commit.
#[tracing::instrument(
    "Manager renaming a login",
    skip(conn)
)]
pub async fn rename_login(
    mut conn: DbConnection,
    acting_login: String,
    current_login: String,
    new_login: String
) -> Result<(), StoreError>{

    spawn_blocking_with_tracing(move || {
        conn.transaction::<(), StoreError, _>(|conn| {
            ensure_manager(conn, &acting_login)?;

            let taken: Option<String> = users::table
                .select(users::login)
                .filter(users::login.eq(&new_login))
                .first::<String>(conn)
                .optional()?;

            if taken.is_some() {
                return Err(StoreError::Conflict(format!("Login {} is already taken", new_login)))
            }

            let affected_rows = diesel::update(users::table)
                .filter(users::login.eq(&current_login))
                .set(users::login.eq(&new_login))
                .execute(conn)?;

            if affected_rows == 0 {
                return Err(StoreError::NotFound(format!("User {} does not exist", current_login)))
            }

            diesel::update(food_orders::table)
                .filter(food_orders::login.eq(&current_login))
                .set(food_orders::login.eq(&new_login))
                .execute(conn)?;

            Ok(())
        })
    })
    .await?
}
