use sea_orm::{ActiveModelTrait, ActiveValue::Set};

use holonet_catalog::domain::repository::{FavoriteRepository, UserRepository};
use holonet_catalog::domain::types::{FavoriteItem, FavoriteTarget, NewUser};
use holonet_catalog::error::CatalogError;
use holonet_catalog::infra::db::ensure_schema;
use holonet_catalog_schema::favorite;

use crate::helpers::{seed_character, seed_planet, seed_user, test_app};

#[tokio::test]
async fn should_reject_duplicate_email() {
    let app = test_app().await;
    seed_user(&app.state, "leia@alderaan.gov").await;

    let result = app
        .state
        .user_repo()
        .create(&NewUser {
            email: "leia@alderaan.gov".to_owned(),
            password: "other".to_owned(),
            is_active: false,
        })
        .await;

    assert!(
        matches!(result, Err(CatalogError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_find_favorite_by_user_and_target() {
    let app = test_app().await;
    let user = seed_user(&app.state, "leia@alderaan.gov").await;
    let planet = seed_planet(&app.state, "Alderaan").await;
    let repo = app.state.favorite_repo();

    let created = repo
        .create(user.id, FavoriteTarget::Planet(planet.id))
        .await
        .unwrap();

    let found = repo
        .find(user.id, FavoriteTarget::Planet(planet.id))
        .await
        .unwrap();
    assert_eq!(found, Some(created.clone()));

    // Same numeric id, other kind of target.
    let miss = repo
        .find(user.id, FavoriteTarget::Character(planet.id))
        .await
        .unwrap();
    assert_eq!(miss, None);

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
}

#[tokio::test]
async fn should_reject_same_favorite_twice() {
    let app = test_app().await;
    let user = seed_user(&app.state, "leia@alderaan.gov").await;
    let luke = seed_character(&app.state, "Luke Skywalker").await;
    let planet = seed_planet(&app.state, "Alderaan").await;
    let repo = app.state.favorite_repo();

    repo.create(user.id, FavoriteTarget::Planet(planet.id))
        .await
        .unwrap();
    let result = repo
        .create(user.id, FavoriteTarget::Planet(planet.id))
        .await;
    assert!(
        matches!(result, Err(CatalogError::FavoriteAlreadyExists)),
        "expected FavoriteAlreadyExists, got {result:?}"
    );

    // A character favorite leaves planet_id NULL and does not collide.
    repo.create(user.id, FavoriteTarget::Character(luke.id))
        .await
        .unwrap();
    let result = repo
        .create(user.id, FavoriteTarget::Character(luke.id))
        .await;
    assert!(matches!(result, Err(CatalogError::FavoriteAlreadyExists)));
}

#[tokio::test]
async fn should_keep_schema_bootstrap_idempotent() {
    let app = test_app().await;
    ensure_schema(&app.state.db).await.unwrap();
}

#[tokio::test]
async fn should_load_targets_when_listing_by_user() {
    let app = test_app().await;
    let user = seed_user(&app.state, "leia@alderaan.gov").await;
    let luke = seed_character(&app.state, "Luke Skywalker").await;
    let planet = seed_planet(&app.state, "Alderaan").await;
    let repo = app.state.favorite_repo();

    repo.create(user.id, FavoriteTarget::Character(luke.id))
        .await
        .unwrap();
    repo.create(user.id, FavoriteTarget::Planet(planet.id))
        .await
        .unwrap();

    let entries = repo.list_by_user(user.id).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].item, FavoriteItem::Character(luke));
    assert_eq!(entries[1].item, FavoriteItem::Planet(planet));
}

#[tokio::test]
async fn should_refuse_favorite_row_without_exactly_one_target() {
    let app = test_app().await;
    let user = seed_user(&app.state, "leia@alderaan.gov").await;
    let luke = seed_character(&app.state, "Luke Skywalker").await;
    let planet = seed_planet(&app.state, "Alderaan").await;

    let neither = favorite::ActiveModel {
        user_id: Set(user.id),
        character_id: Set(None),
        planet_id: Set(None),
        ..Default::default()
    }
    .insert(&app.state.db)
    .await;
    assert!(neither.is_err());

    let both = favorite::ActiveModel {
        user_id: Set(user.id),
        character_id: Set(Some(luke.id)),
        planet_id: Set(Some(planet.id)),
        ..Default::default()
    }
    .insert(&app.state.db)
    .await;
    assert!(both.is_err());
}

#[tokio::test]
async fn should_refuse_favorite_for_missing_user() {
    let app = test_app().await;
    let planet = seed_planet(&app.state, "Alderaan").await;

    let result = app
        .state
        .favorite_repo()
        .create(999, FavoriteTarget::Planet(planet.id))
        .await;

    assert!(matches!(result, Err(CatalogError::Internal(_))));
}
