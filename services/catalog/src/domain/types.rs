/// Catalog account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// Fields required to insert a [`User`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// A person from the catalog. Every physical attribute is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewCharacter {
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
}

/// A planet from the catalog. Every environmental attribute is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct NewPlanet {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
}

/// What a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
}

impl FavoriteTarget {
    /// Rebuild a target from the two nullable foreign-key columns.
    /// Returns `None` unless exactly one of them is set.
    pub fn from_columns(character_id: Option<i32>, planet_id: Option<i32>) -> Option<Self> {
        match (character_id, planet_id) {
            (Some(id), None) => Some(Self::Character(id)),
            (None, Some(id)) => Some(Self::Planet(id)),
            _ => None,
        }
    }

    /// Split into `(character_id, planet_id)` column values.
    pub fn to_columns(self) -> (Option<i32>, Option<i32>) {
        match self {
            Self::Character(id) => (Some(id), None),
            Self::Planet(id) => (None, Some(id)),
        }
    }
}

/// A favorite as stored: owner plus target reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

/// The record a favorite points at, loaded for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteItem {
    Character(Character),
    Planet(Planet),
}

/// A favorite with its target loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub id: i32,
    pub user_id: i32,
    pub item: FavoriteItem,
}
