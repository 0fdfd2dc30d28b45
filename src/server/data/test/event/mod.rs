use crate::server::{data::event::EventRepository, model::event::EventParams};
use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id_with_relations;
mod get_all_with_relations;
mod update;

fn rock_in_rio() -> EventParams {
    EventParams {
        name: "Rock in Rio".to_string(),
        starts_at: Utc.with_ymd_and_hms(2026, 9, 12, 20, 0, 0).unwrap(),
        venue: "Cidade do Rock".to_string(),
        base_price: 525.5,
        description: Some("Primeiro fim de semana".to_string()),
    }
}
