use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_artist_table::Artist, m20260105_000002_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtistEvent::Table)
                    .if_not_exists()
                    .col(integer(ArtistEvent::ArtistId))
                    .col(integer(ArtistEvent::EventId))
                    .primary_key(
                        Index::create()
                            .name("pk_artist_event")
                            .col(ArtistEvent::ArtistId)
                            .col(ArtistEvent::EventId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_event_artist_id")
                            .from(ArtistEvent::Table, ArtistEvent::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_event_event_id")
                            .from(ArtistEvent::Table, ArtistEvent::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArtistEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArtistEvent {
    Table,
    ArtistId,
    EventId,
}
