//! JSON projections of the stored records.
//!
//! Handlers never serialize a row type directly. Each kind has one view
//! declaring exactly the fields exposed over HTTP.

use serde::Serialize;

use crate::model::{Character, CharacterFavorite, Planet, PlanetFavorite, User};

/// Public view of a user. Credentials are not part of it.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: i32,
    pub email: String,
}

impl From<&User> for UserView {
    fn from(value: &User) -> Self {
        Self {
            id: value.id,
            email: value.email.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CharacterView {
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

impl From<Character> for CharacterView {
    fn from(value: Character) -> Self {
        Self {
            id: value.id,
            name: value.name,
            birth_year: value.birth_year,
            gender: value.gender,
            height: value.height,
            skin_color: value.skin_color,
            hair_color: value.hair_color,
            eye_color: value.eye_color,
            description: value.description,
            photo_url: value.photo_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlanetView {
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

impl From<Planet> for PlanetView {
    fn from(value: Planet) -> Self {
        Self {
            id: value.id,
            name: value.name,
            climate: value.climate,
            terrain: value.terrain,
            population: value.population,
            orbital_period: value.orbital_period,
            rotation_period: value.rotation_period,
            diameter: value.diameter,
            description: value.description,
            photo_url: value.photo_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CharacterFavoriteView {
    pub id: i32,
    pub id_user: i32,
    pub id_character: i32,
}

impl From<CharacterFavorite> for CharacterFavoriteView {
    fn from(value: CharacterFavorite) -> Self {
        Self {
            id: value.id,
            id_user: value.id_user,
            id_character: value.id_character,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlanetFavoriteView {
    pub id: i32,
    pub id_user: i32,
    pub id_planet: i32,
}

impl From<PlanetFavorite> for PlanetFavoriteView {
    fn from(value: PlanetFavorite) -> Self {
        Self {
            id: value.id,
            id_user: value.id_user,
            id_planet: value.id_planet,
        }
    }
}

/// Either kind of favorite, serialized as the bare view of its kind.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FavoriteView {
    Character(CharacterFavoriteView),
    Planet(PlanetFavoriteView),
}

/// Character favorites first, then planet favorites, each in store order.
pub fn favorites(
    character_favorites: Vec<CharacterFavorite>,
    planet_favorites: Vec<PlanetFavorite>,
) -> Vec<FavoriteView> {
    character_favorites
        .into_iter()
        .map(|fav| FavoriteView::Character(fav.into()))
        .chain(
            planet_favorites
                .into_iter()
                .map(|fav| FavoriteView::Planet(fav.into())),
        )
        .collect()
}
