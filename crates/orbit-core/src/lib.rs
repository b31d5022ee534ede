pub mod catalog;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod frame;
pub mod graph;
pub mod interaction;
pub mod layout;
pub mod motion;
pub mod particles;
pub mod rings;
pub mod sphere;

pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use frame::*;
pub use graph::*;
pub use interaction::*;
pub use layout::*;
pub use motion::*;
pub use particles::*;
pub use rings::*;
pub use sphere::*;
