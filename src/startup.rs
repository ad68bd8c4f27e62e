use std::net::TcpListener;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{cookie::Key, dev::Server, web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, PgConnection};
use r2d2::Pool;
use secrecy::ExposeSecret;
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    routes::{
        delete_item_route, get_menu, get_open_stores, get_order_detail, get_orders,
        get_own_profile, get_stores, health_check, login, logout, post_item, post_order,
        post_order_status, post_order_timestamp, post_profile, post_user_login,
        post_user_role, put_item, register
    },
    utils::DbPool
};

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    pub async fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let pool = get_connection_pool(&settings)?;

        let listener = TcpListener::bind((
            settings.application.host.as_str(),
            settings.application.port
        ))?;
        let port = listener.local_addr()?.port();

        let server = run(
            listener,
            pool,
            Key::from(settings.application.hmac_secret.expose_secret().as_bytes())
        )?;

        Ok(Application{
            host: settings.application.host,
            port,
            server
        })
    }
}

pub fn get_connection_pool(settings: &Settings) -> Result<DbPool, anyhow::Error>{
    let manager = ConnectionManager::<PgConnection>::new(
        settings.database.get_database_table_url()
    );

    let pool = Pool::new(manager)?;
    Ok(pool)
}

pub fn run(
    listener: TcpListener,
    pool: DbPool,
    session_key: Key
) -> Result<Server, anyhow::Error>{
    let pool = web::Data::new(pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            // The service is fronted over plain http; secure-only cookies
            // would never make it back from the client
            .wrap(
                SessionMiddleware::builder(
                    CookieSessionStore::default(),
                    session_key.clone()
                )
                .cookie_secure(false)
                .build()
            )
            .route("/health_check", web::get().to(health_check))
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/profile", web::get().to(get_own_profile))
            .route("/profile", web::post().to(post_profile))
            .route("/menu", web::get().to(get_menu))
            .route("/menu/item", web::post().to(post_item))
            .route("/menu/item", web::put().to(put_item))
            .route("/menu/item", web::delete().to(delete_item_route))
            .route("/stores", web::get().to(get_stores))
            .route("/stores/open", web::get().to(get_open_stores))
            .route("/order", web::post().to(post_order))
            .route("/orders", web::get().to(get_orders))
            .route("/orders/detail", web::get().to(get_order_detail))
            .route("/order/status", web::post().to(post_order_status))
            .route("/order/timestamp", web::post().to(post_order_timestamp))
            .route("/user/role", web::post().to(post_user_role))
            .route("/user/login", web::post().to(post_user_login))
            .app_data(pool.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
