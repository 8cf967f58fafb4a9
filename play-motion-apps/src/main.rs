use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fs_err as fs;
use play_motion_client::{Node, NodeOptions, Ros2PlayMotionClient, Ros2PlayMotionClientConfig};
use tracing::debug;

/// A one-shot client that requests playback of a predefined motion.
#[derive(Parser, Debug)]
#[clap(name = env!("CARGO_BIN_NAME"))]
struct Args {
    /// Motion to request.
    #[clap(long, default_value = "home")]
    motion_name: String,
    /// Plan an approach to the motion's start position instead of
    /// replaying the stored trajectory directly.
    #[clap(long)]
    with_planning: bool,
    /// Path to a TOML file with the endpoint names. These settings take
    /// priority over --action-name and --is-ready-service-name.
    #[clap(short, long)]
    config_path: Option<PathBuf>,
    /// Action name for play_motion_msgs/PlayMotion.
    #[clap(long, default_value = "/play_motion")]
    action_name: String,
    /// Service name for std_srvs/Trigger readiness checks.
    #[clap(long, default_value = "/play_motion/is_ready")]
    is_ready_service_name: String,
}

impl Args {
    fn client_config(&self) -> Result<Ros2PlayMotionClientConfig> {
        match &self.config_path {
            Some(path) => Ok(toml::from_str(&fs::read_to_string(path)?)?),
            None => Ok(Ros2PlayMotionClientConfig {
                action_name: self.action_name.clone(),
                is_ready_service_name: self.is_ready_service_name.clone(),
            }),
        }
    }
}


#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    debug!("args: {args:?}");
    let config = args.client_config()?;

    let node = Node::new(
        "play_motion_client",
        "/play_motion_client",
        NodeOptions::new().enable_rosout(true),
    )?;
    let client = Ros2PlayMotionClient::new(
        node,
        &config.action_name,
        &config.is_ready_service_name,
    )?;

    client.wait_until_ready().await;
    client
        .play_motion(&args.motion_name, !args.with_planning)
        .await?;
    Ok(())
}
