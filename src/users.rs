use actix_web::{get, web, HttpResponse};
use anyhow::anyhow;

use crate::error::Result;
use crate::projection::UserView;
use crate::{db, DbPool};

#[get("/users")]
pub async fn list_users(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let users = web::block(move || db::list_users(&mut conn)).await??;

    Ok(HttpResponse::Ok().json(users.iter().map(UserView::from).collect::<Vec<_>>()))
}

// digits only, so that `/users/favorites` never lands here
#[get(r"/users/{user_id:\d+}")]
pub async fn get_user(pool: web::Data<DbPool>, user_id: web::Path<i32>) -> Result<HttpResponse> {
    let user_id = user_id.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let user = web::block(move || db::get_user(&mut conn, user_id)).await??;

    Ok(HttpResponse::Ok().json(UserView::from(&user)))
}
