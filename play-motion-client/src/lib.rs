//! ROS2 client for the `play_motion` motion-playback service.
//!
//! `play_motion` executes predefined robot motions identified by name. This
//! crate provides [`Ros2PlayMotionClient`], which waits for the service to
//! report readiness, requests one motion, and returns the outcome.
#![warn(
    future_incompatible,
    missing_docs,
    rust_2018_idioms,
    single_use_lifetimes,
    unreachable_pub
)]
#![warn(clippy::default_trait_access, clippy::wildcard_imports)]

mod client;
mod error;
pub mod msg;
mod node;
mod utils;

pub use crate::{client::*, error::*, node::*};
// re-export
pub use ros2_client;
