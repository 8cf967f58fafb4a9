use std::sync::Arc;

use anyhow::format_err;
use parking_lot::Mutex;
pub use ros2_client::NodeOptions;
use ros2_client::{
    action::{
        ActionClient, ActionClientQosPolicies, ActionServer, ActionServerQosPolicies, ActionTypes,
    },
    ros2::{self, policy, QosPolicies, QosPolicyBuilder},
    Client, Context, Name, NodeName, Server, Service, ServiceMapping,
};

use crate::{msg::MessageType, utils, Error};

/// ROS2 node. This is a wrapper around `Arc<Mutex<ros2_client::Node>>`.
#[derive(Clone)]
pub struct Node {
    inner: Arc<NodeInner>,
}

struct NodeInner {
    node: Mutex<ros2_client::Node>,
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node").finish_non_exhaustive()
    }
}

impl Node {
    /// Creates a new ROS2 node and spawns a thread to spin it.
    pub fn new(name: &str, namespace: &str, options: NodeOptions) -> Result<Self, Error> {
        let ctx = Context::new().map_err(|e| format_err!("failed to create ROS2 context: {e}"))?;
        let node_name = NodeName::new(namespace, name)
            .map_err(|e| format_err!("invalid node name {namespace}/{name}: {e}"))?;
        let mut node = ctx
            .new_node(node_name, options)
            .map_err(|e| format_err!("failed to create ROS2 node: {e}"))?;
        let spinner = node
            .spinner()
            .map_err(|e| format_err!("failed to create spinner: {e}"))?;
        utils::spawn_blocking(async move {
            if let Err(e) = spinner.spin().await {
                tracing::error!("ROS2 spinner stopped: {e}");
            }
        });
        Ok(Self {
            inner: Arc::new(NodeInner {
                node: Mutex::new(node),
            }),
        })
    }

    /// Creates a service client.
    pub fn create_client<S>(&self, service_name: &str) -> Result<Client<S>, Error>
    where
        S: Service + MessageType + 'static,
        S::Request: Clone,
    {
        let qos = service_qos();
        let client = self
            .inner
            .node
            .lock()
            .create_client(
                ServiceMapping::Enhanced,
                &parse_name(service_name)?,
                &S::service_type_name(),
                qos.clone(),
                qos,
            )
            .map_err(|e| format_err!("failed to create client for {service_name}: {e}"))?;
        Ok(client)
    }

    /// Creates a service server.
    pub fn create_server<S>(&self, service_name: &str) -> Result<Server<S>, Error>
    where
        S: Service + MessageType + 'static,
        S::Request: Clone,
    {
        let qos = service_qos();
        let server = self
            .inner
            .node
            .lock()
            .create_server(
                ServiceMapping::Enhanced,
                &parse_name(service_name)?,
                &S::service_type_name(),
                qos.clone(),
                qos,
            )
            .map_err(|e| format_err!("failed to create server for {service_name}: {e}"))?;
        Ok(server)
    }

    /// Creates an action client.
    pub fn create_action_client<A>(&self, action_name: &str) -> Result<ActionClient<A>, Error>
    where
        A: ActionTypes + MessageType + 'static,
        A::GoalType: ros2_client::Message + Clone,
        A::ResultType: ros2_client::Message + Clone,
        A::FeedbackType: ros2_client::Message,
    {
        let qos = service_qos();
        let action_qos = ActionClientQosPolicies {
            goal_service: qos.clone(),
            result_service: qos.clone(),
            cancel_service: qos.clone(),
            feedback_subscription: qos,
            status_subscription: status_qos(),
        };
        let client = self
            .inner
            .node
            .lock()
            .create_action_client(
                ServiceMapping::Enhanced,
                &parse_name(action_name)?,
                &A::action_type_name(),
                action_qos,
            )
            .map_err(|e| format_err!("failed to create action client for {action_name}: {e}"))?;
        Ok(client)
    }

    /// Creates an action server.
    pub fn create_action_server<A>(&self, action_name: &str) -> Result<ActionServer<A>, Error>
    where
        A: ActionTypes + MessageType + 'static,
        A::GoalType: ros2_client::Message + Clone,
        A::ResultType: ros2_client::Message + Clone,
        A::FeedbackType: ros2_client::Message,
    {
        let qos = service_qos();
        let action_qos = ActionServerQosPolicies {
            goal_service: qos.clone(),
            result_service: qos.clone(),
            cancel_service: qos.clone(),
            feedback_publisher: qos,
            status_publisher: status_qos(),
        };
        let server = self
            .inner
            .node
            .lock()
            .create_action_server(
                ServiceMapping::Enhanced,
                &parse_name(action_name)?,
                &A::action_type_name(),
                action_qos,
            )
            .map_err(|e| format_err!("failed to create action server for {action_name}: {e}"))?;
        Ok(server)
    }
}

fn service_qos() -> QosPolicies {
    QosPolicyBuilder::new()
        .reliability(policy::Reliability::Reliable {
            max_blocking_time: ros2::Duration::from_millis(100),
        })
        .history(policy::History::KeepLast { depth: 10 })
        .build()
}

// Status topics are latched so that late-joining clients see the current goal statuses.
fn status_qos() -> QosPolicies {
    QosPolicyBuilder::new()
        .reliability(policy::Reliability::Reliable {
            max_blocking_time: ros2::Duration::from_millis(100),
        })
        .durability(policy::Durability::TransientLocal)
        .history(policy::History::KeepLast { depth: 1 })
        .build()
}

/// Splits a full ROS2 name like `/play_motion/is_ready` into namespace and base name.
fn parse_name(name: &str) -> Result<Name, Error> {
    let (namespace, base_name) = match name.rsplit_once('/') {
        Some(("", base_name)) => ("/", base_name),
        Some((namespace, base_name)) => (namespace, base_name),
        None => ("/", name),
    };
    Name::new(namespace, base_name)
        .map_err(|e| Error::Other(format_err!("invalid name {name}: {e}")))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_name() {
        assert!(parse_name("/play_motion").is_ok());
        assert!(parse_name("/play_motion/is_ready").is_ok());
        assert!(parse_name("play_motion").is_ok());
    }
}
