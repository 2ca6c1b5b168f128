use actix_web::{delete, get, post, web, HttpResponse};
use anyhow::anyhow;

use crate::error::Result;
use crate::projection::{self, CharacterFavoriteView, PlanetFavoriteView};
use crate::{db, DbPool};

#[get("/users/favorites")]
pub async fn list_favorites(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let (character_favs, planet_favs) =
        web::block(move || db::list_all_favorites(&mut conn)).await??;

    Ok(HttpResponse::Ok().json(projection::favorites(character_favs, planet_favs)))
}

#[get("/users/{user_id}/favorites")]
pub async fn list_user_favorites(
    pool: web::Data<DbPool>,
    user_id: web::Path<i32>,
) -> Result<HttpResponse> {
    let user_id = user_id.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let (character_favs, planet_favs) =
        web::block(move || db::list_user_favorites(&mut conn, user_id)).await??;

    Ok(HttpResponse::Ok().json(projection::favorites(character_favs, planet_favs)))
}

#[post("/users/{user_id}/favorites/planets/{planet_id}")]
pub async fn add_planet_favorite(
    pool: web::Data<DbPool>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse> {
    let (user_id, planet_id) = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let favorite =
        web::block(move || db::create_planet_favorite(&mut conn, user_id, planet_id)).await??;

    Ok(HttpResponse::Ok().json(PlanetFavoriteView::from(favorite)))
}

#[post("/users/{user_id}/favorites/characters/{character_id}")]
pub async fn add_character_favorite(
    pool: web::Data<DbPool>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse> {
    let (user_id, character_id) = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let favorite =
        web::block(move || db::create_character_favorite(&mut conn, user_id, character_id))
            .await??;

    Ok(HttpResponse::Ok().json(CharacterFavoriteView::from(favorite)))
}

#[delete("/users/{user_id}/favorites/planets/{planet_id}")]
pub async fn remove_planet_favorite(
    pool: web::Data<DbPool>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse> {
    let (user_id, planet_id) = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    web::block(move || db::delete_planet_favorite(&mut conn, user_id, planet_id)).await??;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Planet deleted as favorite"))
}

#[delete("/users/{user_id}/favorites/characters/{character_id}")]
pub async fn remove_character_favorite(
    pool: web::Data<DbPool>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse> {
    let (user_id, character_id) = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    web::block(move || db::delete_character_favorite(&mut conn, user_id, character_id))
        .await??;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Character deleted as favorite"))
}
