//! Public time map API: the engine, its configuration and change streams.

mod change_stream;
mod time_map_config;
mod time_map_controller;
mod time_map_engine;
mod time_map_subscriptions;

pub use change_stream::{ChangeStream, SubscriptionId};
pub use time_map_config::{DEFAULT_DURATION, DEFAULT_SCALE, DEFAULT_WIDTH, TimeMapConfig};
pub use time_map_controller::TIME_MAP_OBSERVER_ID;
pub use time_map_engine::TimeMapEngine;
