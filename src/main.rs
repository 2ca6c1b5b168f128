use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use diesel::r2d2::ConnectionManager;
use diesel::PgConnection;
use dotenvy::dotenv;
use env_logger::Env;
use r2d2::Pool;

use crate::error::ApiError;
use crate::settings::Settings;

mod characters;
mod db;
mod error;
mod favorites;
mod model;
mod planets;
mod projection;
mod schema;
mod settings;
#[cfg(test)]
mod test_util;
mod users;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = Settings::from_env().context("Invalid configuration.")?;

    let manager = ConnectionManager::<PgConnection>::new(&settings.database_url);
    let pool = Pool::builder()
        .max_size(settings.pool_max_size)
        .build(manager)
        .context("Failed to create pool.")?;

    if settings.run_migrations {
        let mut conn = pool
            .get()
            .context("Couldn't get db connection from pool.")?;
        db::run_migrations(&mut conn)?;
    }

    log::info!("Listening on {}:{}", settings.host, settings.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(configure)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await?;

    Ok(())
}

/// Mounts every endpoint. `/users/favorites` is registered ahead of the
/// per-user routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::InvalidPath(err.to_string()).into()),
    )
    .service(characters::list_characters)
    .service(characters::get_character)
    .service(planets::list_planets)
    .service(planets::get_planet)
    .service(favorites::list_favorites)
    .service(users::list_users)
    .service(users::get_user)
    .service(favorites::list_user_favorites)
    .service(favorites::add_planet_favorite)
    .service(favorites::add_character_favorite)
    .service(favorites::remove_planet_favorite)
    .service(favorites::remove_character_favorite);
}
