use diesel::{Insertable, Queryable, Selectable};

use crate::schema::*;

/// The columns of `users` the API reads. Credentials are never loaded.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = characters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub height: f64,
    pub skin_color: String,
    pub hair_color: String,
    pub eye_color: String,
    pub description: String,
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = planets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: Option<i32>,
    pub orbital_period: f64,
    pub rotation_period: f64,
    pub diameter: f64,
    pub description: String,
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = character_favorites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CharacterFavorite {
    pub id: i32,
    pub id_user: i32,
    pub id_character: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = character_favorites)]
pub struct NewCharacterFavorite {
    pub id_user: i32,
    pub id_character: i32,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = planet_favorites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlanetFavorite {
    pub id: i32,
    pub id_user: i32,
    pub id_planet: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = planet_favorites)]
pub struct NewPlanetFavorite {
    pub id_user: i32,
    pub id_planet: i32,
}
