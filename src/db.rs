use anyhow::anyhow;
use diesel::dsl::exists;
use diesel::{
    select, Connection, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl,
    RunQueryDsl, SelectableHelper,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::{ApiError, Resource, Result};
use crate::model::{
    Character, CharacterFavorite, NewCharacterFavorite, NewPlanetFavorite, Planet, PlanetFavorite,
    User,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn run_migrations(conn: &mut PgConnection) -> anyhow::Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("Failed to run migrations: {}", e))?;
    for version in applied {
        log::info!("Applied migration {}", version);
    }
    Ok(())
}

pub fn list_users(conn: &mut PgConnection) -> Result<Vec<User>> {
    use crate::schema::users::dsl::*;

    Ok(users.order(id).select(User::as_select()).load(conn)?)
}

pub fn get_user(conn: &mut PgConnection, user_id: i32) -> Result<User> {
    use crate::schema::users::dsl::*;

    log::debug!("Looking up user {}", user_id);
    users
        .find(user_id)
        .select(User::as_select())
        .first(conn)
        .optional()?
        .ok_or(ApiError::NotFound(Resource::User))
}

pub fn list_characters(conn: &mut PgConnection) -> Result<Vec<Character>> {
    use crate::schema::characters::dsl::*;

    Ok(characters
        .order(id)
        .select(Character::as_select())
        .load(conn)?)
}

pub fn get_character(conn: &mut PgConnection, character_id: i32) -> Result<Character> {
    use crate::schema::characters::dsl::*;

    log::debug!("Looking up character {}", character_id);
    characters
        .find(character_id)
        .select(Character::as_select())
        .first(conn)
        .optional()?
        .ok_or(ApiError::NotFound(Resource::Character))
}

pub fn list_planets(conn: &mut PgConnection) -> Result<Vec<Planet>> {
    use crate::schema::planets::dsl::*;

    Ok(planets.order(id).select(Planet::as_select()).load(conn)?)
}

pub fn get_planet(conn: &mut PgConnection, planet_id: i32) -> Result<Planet> {
    use crate::schema::planets::dsl::*;

    log::debug!("Looking up planet {}", planet_id);
    planets
        .find(planet_id)
        .select(Planet::as_select())
        .first(conn)
        .optional()?
        .ok_or(ApiError::NotFound(Resource::Planet))
}

/// Every favorite in the store, character favorites and planet favorites.
pub fn list_all_favorites(
    conn: &mut PgConnection,
) -> Result<(Vec<CharacterFavorite>, Vec<PlanetFavorite>)> {
    use crate::schema::{character_favorites, planet_favorites};

    let character_favs = character_favorites::table
        .order(character_favorites::id)
        .select(CharacterFavorite::as_select())
        .load(conn)?;
    let planet_favs = planet_favorites::table
        .order(planet_favorites::id)
        .select(PlanetFavorite::as_select())
        .load(conn)?;

    Ok((character_favs, planet_favs))
}

/// Favorites owned by `user_id`. An unknown user simply owns nothing.
pub fn list_user_favorites(
    conn: &mut PgConnection,
    user_id: i32,
) -> Result<(Vec<CharacterFavorite>, Vec<PlanetFavorite>)> {
    use crate::schema::{character_favorites, planet_favorites};

    let character_favs = character_favorites::table
        .filter(character_favorites::id_user.eq(user_id))
        .order(character_favorites::id)
        .select(CharacterFavorite::as_select())
        .load(conn)?;
    let planet_favs = planet_favorites::table
        .filter(planet_favorites::id_user.eq(user_id))
        .order(planet_favorites::id)
        .select(PlanetFavorite::as_select())
        .load(conn)?;

    Ok((character_favs, planet_favs))
}

fn ensure_user_exists(conn: &mut PgConnection, user_id: i32) -> Result<()> {
    use crate::schema::users;

    let found: bool = select(exists(users::table.find(user_id))).get_result(conn)?;
    if !found {
        return Err(ApiError::NotFound(Resource::User));
    }
    Ok(())
}

pub fn create_character_favorite(
    conn: &mut PgConnection,
    user_id: i32,
    character_id: i32,
) -> Result<CharacterFavorite> {
    use crate::schema::{character_favorites, characters};

    conn.transaction::<_, ApiError, _>(|conn| {
        ensure_user_exists(conn, user_id)?;
        let found: bool =
            select(exists(characters::table.find(character_id))).get_result(conn)?;
        if !found {
            return Err(ApiError::NotFound(Resource::Character));
        }

        let favorite = diesel::insert_into(character_favorites::table)
            .values(NewCharacterFavorite {
                id_user: user_id,
                id_character: character_id,
            })
            .returning(CharacterFavorite::as_returning())
            .get_result(conn)?;

        log::info!(
            "User {} favorited character {} (favorite {})",
            user_id,
            character_id,
            favorite.id
        );
        Ok(favorite)
    })
}

pub fn create_planet_favorite(
    conn: &mut PgConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<PlanetFavorite> {
    use crate::schema::{planet_favorites, planets};

    conn.transaction::<_, ApiError, _>(|conn| {
        ensure_user_exists(conn, user_id)?;
        let found: bool = select(exists(planets::table.find(planet_id))).get_result(conn)?;
        if !found {
            return Err(ApiError::NotFound(Resource::Planet));
        }

        let favorite = diesel::insert_into(planet_favorites::table)
            .values(NewPlanetFavorite {
                id_user: user_id,
                id_planet: planet_id,
            })
            .returning(PlanetFavorite::as_returning())
            .get_result(conn)?;

        log::info!(
            "User {} favorited planet {} (favorite {})",
            user_id,
            planet_id,
            favorite.id
        );
        Ok(favorite)
    })
}

/// Removes one favorite linking the user to the character, the oldest if
/// the pair was favorited more than once. The row is locked before it is
/// deleted, so a concurrent delete of the same row reports it missing.
pub fn delete_character_favorite(
    conn: &mut PgConnection,
    user_id: i32,
    character_id: i32,
) -> Result<CharacterFavorite> {
    use crate::schema::character_favorites::dsl::*;

    conn.transaction::<_, ApiError, _>(|conn| {
        ensure_user_exists(conn, user_id)?;
        let favorite_id: i32 = character_favorites
            .filter(id_user.eq(user_id))
            .filter(id_character.eq(character_id))
            .order(id)
            .select(id)
            .for_update()
            .first(conn)
            .optional()?
            .ok_or(ApiError::FavoriteNotFound(Resource::Character))?;

        let removed = diesel::delete(character_favorites.find(favorite_id))
            .returning(CharacterFavorite::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or(ApiError::FavoriteNotFound(Resource::Character))?;

        log::info!(
            "User {} unfavorited character {} (favorite {})",
            user_id,
            character_id,
            favorite_id
        );
        Ok(removed)
    })
}

/// Removes one favorite linking the user to the planet, the oldest if the
/// pair was favorited more than once.
pub fn delete_planet_favorite(
    conn: &mut PgConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<PlanetFavorite> {
    use crate::schema::planet_favorites::dsl::*;

    conn.transaction::<_, ApiError, _>(|conn| {
        ensure_user_exists(conn, user_id)?;
        let favorite_id: i32 = planet_favorites
            .filter(id_user.eq(user_id))
            .filter(id_planet.eq(planet_id))
            .order(id)
            .select(id)
            .for_update()
            .first(conn)
            .optional()?
            .ok_or(ApiError::FavoriteNotFound(Resource::Planet))?;

        let removed = diesel::delete(planet_favorites.find(favorite_id))
            .returning(PlanetFavorite::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or(ApiError::FavoriteNotFound(Resource::Planet))?;

        log::info!(
            "User {} unfavorited planet {} (favorite {})",
            user_id,
            planet_id,
            favorite_id
        );
        Ok(removed)
    })
}
