#![allow(unreachable_pub, missing_docs, non_snake_case)]

pub trait MessageType: Sized {
    fn message_type_name() -> ros2_client::MessageTypeName;
    fn action_type_name() -> ros2_client::ActionTypeName;
    fn service_type_name() -> ros2_client::ServiceTypeName;
}

/// [std_srvs](https://github.com/ros2/common_interfaces/tree/HEAD/std_srvs)
pub mod std_srvs {
    use serde::{Deserialize, Serialize};

    use crate::msg::MessageType;

    pub type Trigger = ros2_client::AService<TriggerRequest, TriggerResponse>;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct TriggerRequest {}

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct TriggerResponse {
        pub success: bool,
        pub message: String,
    }

    impl ros2_client::Message for TriggerRequest {}
    impl ros2_client::Message for TriggerResponse {}

    impl MessageType for Trigger {
        fn message_type_name() -> ros2_client::MessageTypeName {
            unimplemented!()
        }

        fn action_type_name() -> ros2_client::ActionTypeName {
            unimplemented!()
        }

        fn service_type_name() -> ros2_client::ServiceTypeName {
            ros2_client::ServiceTypeName::new("std_srvs", "Trigger")
        }
    }
}

/// [play_motion_msgs](https://github.com/pal-robotics/play_motion/tree/HEAD/play_motion_msgs)
pub mod play_motion_msgs {
    pub mod PlayMotion {
        use serde::{Deserialize, Serialize};

        use crate::msg::MessageType;

        pub type Action = ros2_client::action::Action<Goal, Result, Feedback>;

        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Goal {
            pub motion_name: String,
            pub skip_planning: bool,
        }

        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Result {
            pub error_code: i32,
            pub error_string: String,
        }

        impl Result {
            pub const SUCCEEDED: i32 = 1;
            pub const MOTION_NOT_FOUND: i32 = 2;
            pub const INFEASIBLE_REACH_POSE: i32 = 3;
            pub const UNREACHABLE_JOINT_GOAL: i32 = 4;
            pub const NO_PLAN_FOUND: i32 = 5;
            pub const CONTROLLER_BUSY: i32 = 6;
            pub const MISSING_CONTROLLER: i32 = 7;
            pub const TRAJECTORY_ERROR: i32 = 8;
            pub const GOAL_NOT_REACHED: i32 = 9;
            pub const OTHER_ERROR: i32 = 10;
        }

        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Feedback {}

        impl ros2_client::Message for Goal {}
        impl ros2_client::Message for Result {}
        impl ros2_client::Message for Feedback {}

        impl MessageType for Action {
            fn message_type_name() -> ros2_client::MessageTypeName {
                ros2_client::MessageTypeName::new("play_motion_msgs", "PlayMotion")
            }

            fn action_type_name() -> ros2_client::ActionTypeName {
                ros2_client::ActionTypeName::new("play_motion_msgs", "PlayMotion")
            }

            fn service_type_name() -> ros2_client::ServiceTypeName {
                unimplemented!()
            }
        }
    }
}
