use crate::server::{
    data::artist_event::ArtistEventRepository, model::artist_event::ArtistEventParams,
};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;
