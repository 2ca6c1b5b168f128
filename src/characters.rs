use actix_web::{get, web, HttpResponse};
use anyhow::anyhow;

use crate::error::Result;
use crate::projection::CharacterView;
use crate::{db, DbPool};

#[get("/characters")]
pub async fn list_characters(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let characters = web::block(move || db::list_characters(&mut conn)).await??;

    Ok(HttpResponse::Ok().json(
        characters
            .into_iter()
            .map(CharacterView::from)
            .collect::<Vec<_>>(),
    ))
}

#[get("/characters/{character_id}")]
pub async fn get_character(
    pool: web::Data<DbPool>,
    character_id: web::Path<i32>,
) -> Result<HttpResponse> {
    let character_id = character_id.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let character = web::block(move || db::get_character(&mut conn, character_id)).await??;

    Ok(HttpResponse::Ok().json(CharacterView::from(character)))
}
