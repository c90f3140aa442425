pub mod app;
pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod io;
pub mod render;
pub mod rng;
pub mod rule_set;
pub mod world;

pub use app::App;
pub use board::Board;
pub use config::Config;
pub use error::Error;
pub use world::World;
