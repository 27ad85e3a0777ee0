/// Tests for ordering, filtering and table output
use rediboard::controller::InstanceListController;
use rediboard::models::InstancesPayload;
use rediboard::render::{build_table, visible_instances};
use serde_json::json;

fn loaded_controller() -> InstanceListController {
    let payload: InstancesPayload = serde_json::from_value(json!({
        "instances": [
            {
                "name": "sessions",
                "host": "redis-a.example",
                "port": "6379",
                "role": "master",
                "errors": [],
                "connections": [{"host": "redis-b.example", "port": "6379"}],
                "used_memory:": 1536,
                "maxmemory": 0
            },
            {
                "name": "cache",
                "vip": "10.0.0.9",
                "port": "6380",
                "errors": ["Connection error [dial tcp 10.0.0.9:6380: i/o timeout]"],
                "connections": []
            },
            {
                "name": "archive",
                "host": "redis-c.example",
                "port": "6381",
                "errors": [],
                "connections": [],
                "used_memory:": 1073741824,
                "maxmemory": 2147483648u64
            }
        ],
        "errors": []
    }))
    .unwrap();

    let mut controller = InstanceListController::new();
    controller.apply(Ok(payload));
    controller
}

fn names(controller: &InstanceListController, show_all: bool) -> Vec<String> {
    visible_instances(controller, show_all)
        .iter()
        .map(|i| i.name.clone())
        .collect()
}

#[test]
fn test_visible_instances_sorted_and_filtered() {
    let controller = loaded_controller();
    assert_eq!(names(&controller, false), ["cache", "sessions"]);
    assert_eq!(names(&controller, true), ["archive", "cache", "sessions"]);
}

#[test]
fn test_visible_instances_follow_sort_field() {
    let mut controller = loaded_controller();
    controller.set_sort_field("port");
    assert_eq!(names(&controller, true), ["sessions", "cache", "archive"]);

    controller.set_sort_field("used_memory");
    assert_eq!(names(&controller, true), ["sessions", "archive", "cache"]);
}

#[test]
fn test_sorting_does_not_reorder_view_state() {
    let mut controller = loaded_controller();
    controller.set_sort_field("name");
    let _ = visible_instances(&controller, true);
    let stored: Vec<&str> = controller.instances().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(stored, ["sessions", "cache", "archive"]);
}

#[test]
fn test_table_contents() {
    let controller = loaded_controller();
    let rendered = build_table(&controller, true, None).to_string();

    assert!(rendered.contains("Name ▲"));
    assert!(rendered.contains("1.5 KB"));
    assert!(rendered.contains("unlimited"));
    assert!(rendered.contains("1 GB"));
    assert!(rendered.contains("2 GB"));
    assert!(rendered.contains("redis-b.example:6379"));
    assert!(rendered.contains("10.0.0.9"));
    assert!(rendered.contains("i/o timeout"));
}

#[test]
fn test_table_hides_idle_instances() {
    let controller = loaded_controller();
    let rendered = build_table(&controller, false, None).to_string();

    assert!(rendered.contains("sessions"));
    assert!(rendered.contains("cache"));
    assert!(!rendered.contains("archive"));
}

#[test]
fn test_sort_marker_moves_with_sort_field() {
    let mut controller = loaded_controller();
    controller.set_sort_field("maxmemory");
    let rendered = build_table(&controller, true, None).to_string();

    assert!(rendered.contains("Max memory ▲"));
    assert!(!rendered.contains("Name ▲"));
}
