use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "artist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub genre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::artist_event::Entity")]
    ArtistEvent,
}

impl Related<super::artist_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtistEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
