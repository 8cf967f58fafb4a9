use thiserror::Error;

/// Error type of this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A round trip to a remote endpoint did not complete.
    #[error("play_motion: Connection error : {}", message)]
    Connection {
        /// Error message.
        message: String,
    },
    /// The action server refused the goal.
    #[error("play_motion: Goal rejected")]
    GoalRejected,
    /// The motion was executed but did not succeed.
    #[error("play_motion: Motion failed with error ({}): {}", error_code, error_string)]
    MotionFailed {
        /// Error code reported by the server.
        error_code: i32,
        /// Human-readable explanation reported by the server.
        error_string: String,
    },
    /// Other error.
    #[error("play_motion: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}
