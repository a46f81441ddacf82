pub mod use_tracker;

pub use use_tracker::{use_tracker, UseTrackerResult};
