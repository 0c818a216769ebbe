use sea_orm::entity::prelude::*;

/// A person from the catalog (served under `/people`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(120))")]
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub gender: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub birth_year: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub eye_color: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorites,
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
