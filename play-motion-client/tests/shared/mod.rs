use std::sync::atomic::{AtomicUsize, Ordering};

use play_motion_client::*;

pub fn test_node() -> Node {
    static COUNT: AtomicUsize = AtomicUsize::new(0);
    let n = COUNT.fetch_add(1, Ordering::Relaxed);
    let node_name = format!("test_play_motion_node_{n}");
    Node::new(
        &node_name,
        "/play_motion_test",
        NodeOptions::new().enable_rosout(true),
    )
    .unwrap()
}
