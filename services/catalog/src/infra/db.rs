use std::collections::HashMap;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Schema, SqlErr,
    sea_query::{Expr, Index, IndexCreateStatement},
};

use holonet_catalog_schema::{character, favorite, planet, user};

use crate::domain::repository::{
    CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository,
};
use crate::domain::types::{
    Character, Favorite, FavoriteEntry, FavoriteItem, FavoriteTarget, NewCharacter, NewPlanet,
    NewUser, Planet, User,
};
use crate::error::CatalogError;

// ── Schema bootstrap ─────────────────────────────────────────────────────────

const FAVORITE_TARGET_CHECK: &str = "(character_id IS NULL) <> (planet_id IS NULL)";

/// Create the catalog tables if they do not exist yet. Parents first so the
/// favorite foreign keys resolve.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut favorites = schema.create_table_from_entity(favorite::Entity);
    favorites.check(Expr::cust(FAVORITE_TARGET_CHECK));

    let statements = [
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(character::Entity),
        schema.create_table_from_entity(planet::Entity),
        favorites,
    ];
    for mut statement in statements {
        statement.if_not_exists();
        db.execute(backend.build(&statement)).await?;
    }

    // NULL columns never collide, so each index only constrains its own kind
    // of favorite.
    let indexes = [
        favorite_target_index("idx-favorite-user-character", favorite::Column::CharacterId),
        favorite_target_index("idx-favorite-user-planet", favorite::Column::PlanetId),
    ];
    for statement in indexes {
        db.execute(backend.build(&statement)).await?;
    }
    Ok(())
}

fn favorite_target_index(name: &str, target: favorite::Column) -> IndexCreateStatement {
    Index::create()
        .name(name)
        .table(favorite::Entity)
        .col(favorite::Column::UserId)
        .col(target)
        .unique()
        .if_not_exists()
        .to_owned()
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, CatalogError> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, CatalogError> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, CatalogError> {
        let model = user::ActiveModel {
            email: Set(new_user.email.clone()),
            password: Set(new_user.password.clone()),
            is_active: Set(new_user.is_active),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => CatalogError::UserAlreadyExists,
            _ => anyhow::Error::new(e).context("insert user").into(),
        })?;
        Ok(user_from_model(model))
    }
}

fn user_from_model(model: user::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password: model.password,
        is_active: model.is_active,
    }
}

// ── Character repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCharacterRepository {
    pub db: DatabaseConnection,
}

impl CharacterRepository for DbCharacterRepository {
    async fn list(&self) -> Result<Vec<Character>, CatalogError> {
        let models = character::Entity::find()
            .order_by_asc(character::Column::Id)
            .all(&self.db)
            .await
            .context("list characters")?;
        Ok(models.into_iter().map(character_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, CatalogError> {
        let model = character::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find character by id")?;
        Ok(model.map(character_from_model))
    }

    async fn create(&self, new_character: &NewCharacter) -> Result<Character, CatalogError> {
        let model = character::ActiveModel {
            name: Set(new_character.name.clone()),
            height: Set(new_character.height),
            mass: Set(new_character.mass),
            gender: Set(new_character.gender.clone()),
            birth_year: Set(new_character.birth_year.clone()),
            eye_color: Set(new_character.eye_color.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("insert character")?;
        Ok(character_from_model(model))
    }
}

fn character_from_model(model: character::Model) -> Character {
    Character {
        id: model.id,
        name: model.name,
        height: model.height,
        mass: model.mass,
        gender: model.gender,
        birth_year: model.birth_year,
        eye_color: model.eye_color,
    }
}

// ── Planet repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPlanetRepository {
    pub db: DatabaseConnection,
}

impl PlanetRepository for DbPlanetRepository {
    async fn list(&self) -> Result<Vec<Planet>, CatalogError> {
        let models = planet::Entity::find()
            .order_by_asc(planet::Column::Id)
            .all(&self.db)
            .await
            .context("list planets")?;
        Ok(models.into_iter().map(planet_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, CatalogError> {
        let model = planet::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find planet by id")?;
        Ok(model.map(planet_from_model))
    }

    async fn create(&self, new_planet: &NewPlanet) -> Result<Planet, CatalogError> {
        let model = planet::ActiveModel {
            name: Set(new_planet.name.clone()),
            climate: Set(new_planet.climate.clone()),
            terrain: Set(new_planet.terrain.clone()),
            population: Set(new_planet.population),
            diameter: Set(new_planet.diameter),
            rotation_period: Set(new_planet.rotation_period),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("insert planet")?;
        Ok(planet_from_model(model))
    }
}

fn planet_from_model(model: planet::Model) -> Planet {
    Planet {
        id: model.id,
        name: model.name,
        climate: model.climate,
        terrain: model.terrain,
        population: model.population,
        diameter: model.diameter,
        rotation_period: model.rotation_period,
    }
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl DbFavoriteRepository {
    async fn characters_by_id(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, Character>, CatalogError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let models = character::Entity::find()
            .filter(character::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .context("load favorite characters")?;
        Ok(models
            .into_iter()
            .map(|model| (model.id, character_from_model(model)))
            .collect())
    }

    async fn planets_by_id(&self, ids: Vec<i32>) -> Result<HashMap<i32, Planet>, CatalogError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let models = planet::Entity::find()
            .filter(planet::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .context("load favorite planets")?;
        Ok(models
            .into_iter()
            .map(|model| (model.id, planet_from_model(model)))
            .collect())
    }
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<FavoriteEntry>, CatalogError> {
        let models = favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_asc(favorite::Column::Id)
            .all(&self.db)
            .await
            .context("list favorites by user")?;
        let favorites = models
            .into_iter()
            .map(favorite_from_model)
            .collect::<Result<Vec<_>, _>>()?;

        let mut character_ids = Vec::new();
        let mut planet_ids = Vec::new();
        for fav in &favorites {
            match fav.target {
                FavoriteTarget::Character(id) => character_ids.push(id),
                FavoriteTarget::Planet(id) => planet_ids.push(id),
            }
        }
        let characters = self.characters_by_id(character_ids).await?;
        let planets = self.planets_by_id(planet_ids).await?;

        favorites
            .into_iter()
            .map(|fav| -> Result<FavoriteEntry, CatalogError> {
                let item = match fav.target {
                    FavoriteTarget::Character(id) => characters
                        .get(&id)
                        .cloned()
                        .map(FavoriteItem::Character),
                    FavoriteTarget::Planet(id) => {
                        planets.get(&id).cloned().map(FavoriteItem::Planet)
                    }
                }
                .ok_or_else(|| anyhow::anyhow!("favorite {} points at a missing record", fav.id))?;
                Ok(FavoriteEntry {
                    id: fav.id,
                    user_id: fav.user_id,
                    item,
                })
            })
            .collect()
    }

    async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, CatalogError> {
        let query = favorite::Entity::find().filter(favorite::Column::UserId.eq(user_id));
        let query = match target {
            FavoriteTarget::Character(id) => query.filter(favorite::Column::CharacterId.eq(id)),
            FavoriteTarget::Planet(id) => query.filter(favorite::Column::PlanetId.eq(id)),
        };
        let model = query
            .order_by_asc(favorite::Column::Id)
            .one(&self.db)
            .await
            .context("find favorite")?;
        model.map(favorite_from_model).transpose()
    }

    async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Favorite, CatalogError> {
        let (character_id, planet_id) = target.to_columns();
        let model = favorite::ActiveModel {
            user_id: Set(user_id),
            character_id: Set(character_id),
            planet_id: Set(planet_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => CatalogError::FavoriteAlreadyExists,
            _ => anyhow::Error::new(e).context("insert favorite").into(),
        })?;
        favorite_from_model(model)
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogError> {
        let result = favorite::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete favorite")?;
        Ok(result.rows_affected > 0)
    }
}

fn favorite_from_model(model: favorite::Model) -> Result<Favorite, CatalogError> {
    let target = FavoriteTarget::from_columns(model.character_id, model.planet_id)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "favorite {} must reference exactly one of character or planet",
                model.id
            )
        })?;
    Ok(Favorite {
        id: model.id,
        user_id: model.user_id,
        target,
    })
}
