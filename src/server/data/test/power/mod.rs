use crate::server::data::power::PowerRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod get_all;
mod get_by_id;
mod update_description;
