//! Integration tests for picklist
//!
//! These tests drive the selection controller through the public API with a
//! manual clock, and exercise loading items from temporary files.

use picklist::config::OutputFormat;
use picklist::output::format_items;
use picklist::select::{
    ControllerEvent, Item, ManualClock, QueryPhase, SelectionController, Update, compute_view,
};
use picklist::source::{SourceFormat, SourceSpec};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

const DELAY: Duration = Duration::from_millis(300);

/// Helper function to build the three-fruit source
fn fruits() -> Vec<Item> {
    vec![
        Item::new("1", "Apple"),
        Item::new("2", "Banana"),
        Item::new("3", "Cherry"),
    ]
}

/// Helper function to create a controller driven by a manual clock
fn setup_controller(items: Vec<Item>) -> (SelectionController<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let controller = SelectionController::with_clock(items, DELAY, clock.clone());
    (controller, clock)
}

fn view_names(controller: &SelectionController<ManualClock>) -> Vec<String> {
    controller.view().map(|item| item.name.clone()).collect()
}

/// Helper function to create a test file
fn create_test_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_fruit_scenario() {
    let (mut controller, clock) = setup_controller(fruits());

    for text in ["a", "an"] {
        controller.handle(ControllerEvent::QueryTextChanged(text.into()));
    }
    assert_eq!(controller.phase(), QueryPhase::Pending);
    assert_eq!(view_names(&controller), vec!["Apple", "Banana", "Cherry"]);

    clock.advance(DELAY);
    assert_eq!(controller.tick(), Update::Redraw);
    assert_eq!(view_names(&controller), vec!["Banana"]);

    controller.handle(ControllerEvent::ItemActivated(Item::new("2", "Banana")));
    assert_eq!(controller.selected_count(), 1);
    assert!(controller.is_selected("2"));

    assert_eq!(
        controller.handle(ControllerEvent::ClearRequested),
        Update::ResetInput
    );
    assert_eq!(view_names(&controller), vec!["Apple", "Banana", "Cherry"]);
    assert_eq!(controller.selected_items(), vec![&Item::new("2", "Banana")]);
}

#[test]
fn test_rapid_typing_commits_final_text_once() {
    let (mut controller, clock) = setup_controller(fruits());

    for text in ["c", "ch", "che", "cher"] {
        controller.on_query_change(text);
        clock.advance(Duration::from_millis(100));
        assert_eq!(controller.tick(), Update::Unchanged);
    }
    assert_eq!(controller.settled_query(), "");

    // One full delay after the last keystroke
    clock.advance(Duration::from_millis(199));
    assert_eq!(controller.tick(), Update::Unchanged);
    clock.advance(Duration::from_millis(1));
    assert_eq!(controller.tick(), Update::Redraw);
    assert_eq!(controller.settled_query(), "cher");
    assert_eq!(view_names(&controller), vec!["Cherry"]);

    // Nothing left to commit
    clock.advance(DELAY);
    assert_eq!(controller.tick(), Update::Unchanged);
    assert_eq!(controller.phase(), QueryPhase::Idle);
}

#[test]
fn test_selection_independent_of_filter() {
    let (mut controller, clock) = setup_controller(fruits());

    controller.toggle(&Item::new("1", "Apple"));
    controller.on_query_change("cherry");
    clock.advance(DELAY);
    controller.tick();

    assert_eq!(view_names(&controller), vec!["Cherry"]);
    assert!(controller.is_selected("1"));
    assert_eq!(controller.frame().selected_count, 1);

    controller.clear();
    assert!(view_names(&controller).contains(&"Apple".to_string()));
    assert!(controller.is_selected("1"));
}

#[test]
fn test_toggle_twice_restores_selection() {
    let (mut controller, _) = setup_controller(fruits());
    controller.toggle(&Item::new("3", "Cherry"));
    let before: Vec<String> = controller.selection().ids().map(str::to_string).collect();

    controller.toggle(&Item::new("1", "Apple"));
    controller.toggle(&Item::new("1", "Apple"));

    let after: Vec<String> = controller.selection().ids().map(str::to_string).collect();
    assert_eq!(before, after);
}

#[test]
fn test_teardown_discards_pending_query() {
    let (mut controller, clock) = setup_controller(fruits());
    controller.on_query_change("apple");
    controller.teardown();

    clock.advance(DELAY);
    assert_eq!(controller.tick(), Update::Unchanged);
    assert_eq!(controller.settled_query(), "");
    assert_eq!(controller.view_len(), 3);
    assert!(!controller.is_mounted());
}

#[test]
fn test_compute_view_properties() {
    let source = fruits();
    assert_eq!(compute_view(&source, "").len(), source.len());
    assert_eq!(
        compute_view(&source, "ERR"),
        vec![&Item::new("3", "Cherry")]
    );
    assert!(compute_view(&[], "a").is_empty());
}

#[test]
fn test_reload_from_file_keeps_selection() {
    let file = create_test_file(".json", r#"[{"id": "1", "name": "Apple"}]"#);
    let spec = SourceSpec::File {
        path: file.path().to_path_buf(),
        format: None,
    };
    assert!(spec.is_reloadable());

    let (mut controller, _) = setup_controller(spec.load().unwrap());
    controller.toggle(&Item::new("1", "Apple"));

    std::fs::write(
        file.path(),
        r#"[{"id": "1", "name": "Apple"}, {"id": "9", "name": "Kiwi"}]"#,
    )
    .unwrap();
    assert_eq!(
        controller.handle(ControllerEvent::SourceReplaced(spec.load().unwrap())),
        Update::Redraw
    );

    assert_eq!(view_names(&controller), vec!["Apple", "Kiwi"]);
    assert!(controller.is_selected("1"));
}

#[test]
fn test_picked_items_output() {
    let file = create_test_file(".csv", "id,name\nb1,Blueberry\nr2,Raspberry\n");
    let spec = SourceSpec::File {
        path: file.path().to_path_buf(),
        format: Some(SourceFormat::Csv),
    };
    let (mut controller, _) = setup_controller(spec.load().unwrap());

    controller.toggle(&Item::new("r2", "Raspberry"));
    controller.toggle(&Item::new("b1", "Blueberry"));

    let picked: Vec<Item> = controller.selected_items().into_iter().cloned().collect();
    assert_eq!(format_items(&picked, OutputFormat::Ids).unwrap(), "r2\nb1");
    assert_eq!(
        format_items(&picked, OutputFormat::Names).unwrap(),
        "Raspberry\nBlueberry"
    );
}

#[test]
fn test_duplicate_ids_in_file_are_one_item() {
    let file = create_test_file(
        ".json",
        r#"[{"id": "1", "name": "Apple"}, {"id": "1", "name": "Apricot"}]"#,
    );
    let spec = SourceSpec::File {
        path: file.path().to_path_buf(),
        format: None,
    };
    let (mut controller, _) = setup_controller(spec.load().unwrap());

    controller.handle(ControllerEvent::ItemActivated(Item::new("1", "Apple")));
    let frame = controller.frame();
    assert!(frame.view.iter().all(|item| frame.is_selected(item)));
    assert_eq!(controller.selected_count(), 1);

    let picked: Vec<Item> = controller.selected_items().into_iter().cloned().collect();
    assert_eq!(format_items(&picked, OutputFormat::Ids).unwrap(), "1");

    controller.handle(ControllerEvent::ItemActivated(Item::new("1", "Apricot")));
    assert_eq!(controller.selected_count(), 0);
    assert!(controller.selected_items().is_empty());
}
