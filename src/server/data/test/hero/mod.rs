use crate::server::data::hero::HeroRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod get_all;
mod get_by_id;
