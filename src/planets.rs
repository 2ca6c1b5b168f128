use actix_web::{get, web, HttpResponse};
use anyhow::anyhow;

use crate::error::Result;
use crate::projection::PlanetView;
use crate::{db, DbPool};

#[get("/planets")]
pub async fn list_planets(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let planets = web::block(move || db::list_planets(&mut conn)).await??;

    Ok(HttpResponse::Ok().json(planets.into_iter().map(PlanetView::from).collect::<Vec<_>>()))
}

#[get("/planets/{planet_id}")]
pub async fn get_planet(pool: web::Data<DbPool>, planet_id: web::Path<i32>) -> Result<HttpResponse> {
    let planet_id = planet_id.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let planet = web::block(move || db::get_planet(&mut conn, planet_id)).await??;

    Ok(HttpResponse::Ok().json(PlanetView::from(planet)))
}
