#![forbid(unsafe_code)]

pub mod answer;
pub mod format;
pub mod model;
pub mod narrative;
pub mod ranking;
pub mod sampler;
pub mod time;

pub use ranking::{Tier, classify};
pub use time::Clock;
