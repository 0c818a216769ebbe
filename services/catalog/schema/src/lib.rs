//! sea-orm entities for the catalog tables.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
