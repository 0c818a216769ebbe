pub mod favorite;
pub mod health;
pub mod params;
pub mod people;
pub mod planet;
pub mod sitemap;
pub mod user;
