use std::time::Duration;

use anyhow::format_err;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{
    msg::{
        play_motion_msgs::PlayMotion,
        std_srvs::{Trigger, TriggerRequest, TriggerResponse},
    },
    Error, Node,
};

const PROBE_INTERVAL: Duration = Duration::from_secs(1);
const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Client for the `play_motion` motion-playback service.
///
/// The service accepts play_motion_msgs/PlayMotion goals once its
/// std_srvs/Trigger readiness service answers with `success: true`.
pub struct Ros2PlayMotionClient {
    action_client: ros2_client::action::ActionClient<PlayMotion::Action>,
    is_ready_client: ros2_client::Client<Trigger>,
    // keep not to be dropped
    _node: Node,
}

impl std::fmt::Debug for Ros2PlayMotionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ros2PlayMotionClient").finish_non_exhaustive()
    }
}

impl Ros2PlayMotionClient {
    /// Creates a new `Ros2PlayMotionClient` from play_motion_msgs/PlayMotion
    /// action and std_srvs/Trigger service names.
    pub fn new(node: Node, action_name: &str, is_ready_service_name: &str) -> Result<Self, Error> {
        let action_client = node.create_action_client::<PlayMotion::Action>(action_name)?;
        let is_ready_client = node.create_client::<Trigger>(is_ready_service_name)?;
        Ok(Self {
            action_client,
            is_ready_client,
            _node: node,
        })
    }

    /// Waits until `play_motion` reports that it is ready to accept goals.
    ///
    /// Probes the readiness service once per second; each attempt is a single
    /// round trip bounded by a per-attempt timeout. Probe failures and
    /// `success: false` answers are logged and retried without limit, so this
    /// only returns once the service has answered positively.
    pub async fn wait_until_ready(&self) {
        loop {
            tokio::time::sleep(PROBE_INTERVAL).await;
            match self.probe_once().await {
                Ok(res) if res.success => {
                    info!("play_motion is ready");
                    return;
                }
                Ok(_) => error!("play_motion is not ready"),
                Err(e) => error!("readiness probe failed: {e}"),
            }
        }
    }

    async fn probe_once(&self) -> Result<TriggerResponse, Error> {
        let round_trip = async {
            let request_id = self
                .is_ready_client
                .async_send_request(TriggerRequest {})
                .await
                .map_err(|e| format_err!("failed to send readiness probe: {e}"))?;
            self.is_ready_client
                .async_receive_response(request_id)
                .await
                .map_err(|e| format_err!("failed to receive readiness probe response: {e}"))
        };
        match tokio::time::timeout(PROBE_TIMEOUT, round_trip).await {
            Ok(res) => res.map_err(Error::Other),
            Err(_) => Err(Error::Connection {
                message: format!("readiness probe timed out after {PROBE_TIMEOUT:?}"),
            }),
        }
    }

    /// Requests playback of the named motion and waits for the outcome.
    ///
    /// If `skip_planning` is true, the stored trajectory is replayed without
    /// planning an approach to its start position.
    pub async fn play_motion(&self, motion_name: &str, skip_planning: bool) -> Result<(), Error> {
        let goal = PlayMotion::Goal {
            motion_name: motion_name.to_owned(),
            skip_planning,
        };
        let (goal_id, response) = self
            .action_client
            .async_send_goal(goal)
            .await
            .map_err(|e| format_err!("failed to send goal: {e:?}"))?;
        if !response.accepted {
            error!("goal rejected");
            return Err(Error::GoalRejected);
        }
        info!("goal accepted");

        let (_status, result) = self
            .action_client
            .async_request_result(goal_id)
            .await
            .map_err(|e| format_err!("failed to receive result: {e:?}"))?;
        if result.error_code == PlayMotion::Result::SUCCEEDED {
            info!("motion succeeded");
            Ok(())
        } else {
            error!(
                "motion failed with error ({}): {}",
                result.error_code, result.error_string
            );
            Err(Error::MotionFailed {
                error_code: result.error_code,
                error_string: result.error_string,
            })
        }
    }
}

/// Configuration for `Ros2PlayMotionClient`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Ros2PlayMotionClientConfig {
    /// Action name for play_motion_msgs/PlayMotion.
    pub action_name: String,
    /// Service name for std_srvs/Trigger readiness checks.
    pub is_ready_service_name: String,
}

impl Default for Ros2PlayMotionClientConfig {
    fn default() -> Self {
        Self {
            action_name: "/play_motion".to_owned(),
            is_ready_service_name: "/play_motion/is_ready".to_owned(),
        }
    }
}
