use crate::{
    model::ticket::TicketKind,
    server::{data::ticket::TicketRepository, model::ticket::TicketParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;
mod update;
