use metalctl_testing::{TestWorld, fixtures};

#[test]
fn test_list_marks_active_context() {
    let world = TestWorld::new().with_config(fixtures::CONTEXT_CONFIG);

    let result = world.run(&["context", "list"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let lines = result.lines();
    assert_eq!(lines.len(), 3);
    // sorted by name
    assert!(lines[1].contains("✔") && lines[1].contains("dev") && lines[1].contains("p-dev"));
    assert!(!lines[2].contains("✔") && lines[2].contains("prod"));
}

#[test]
fn test_switch_persists_and_show_reports_it() {
    let world = TestWorld::new().with_config(fixtures::CONTEXT_CONFIG);

    let result = world.run(&["context", "switch", "prod"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.stdout(), "Switched context to \"prod\"\n");
    assert!(world.config().contains("current_context = \"prod\""));
    assert!(world.config().contains("p-dev"));

    let result = world.run(&["context", "show"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.stdout(), "prod\n");
}

#[test]
fn test_switch_to_active_context_is_a_noop() {
    let world = TestWorld::new().with_config(fixtures::CONTEXT_CONFIG);
    let before = world.config();

    let result = world.run(&["context", "switch", "dev"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.stdout(), "Context \"dev\" already active\n");
    assert_eq!(world.config(), before);
}

#[test]
fn test_switch_to_unknown_context_fails() {
    let world = TestWorld::new().with_config(fixtures::CONTEXT_CONFIG);

    let result = world.run(&["context", "switch", "staging"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains(r#"context "staging" not found in config"#));
}

#[test]
fn test_show_without_config() {
    let world = TestWorld::new();

    let result = world.run(&["context", "show"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("no context is active"));
}
