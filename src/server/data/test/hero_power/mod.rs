use crate::server::{data::hero_power::HeroPowerRepository, model::hero_power::Strength};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_hero_id;
