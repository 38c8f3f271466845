//! Scripted picker for testing

use super::error::Result;
use super::traits::{Picker, PickerConfig};
use super::types::PickResult;
use crate::select::{ControllerEvent, ManualClock, SelectionController};
use std::time::Duration;

/// A single step of a scripted session
#[derive(Debug, Clone)]
pub enum Step {
    /// Deliver an event to the controller
    Event(ControllerEvent),
    /// Let time pass, then tick the controller
    Wait(Duration),
}

/// Mock picker that replays a script against a real controller
///
/// Useful for testing without requiring user interaction. Time is driven
/// by a [`ManualClock`], so debounce behavior is deterministic.
#[derive(Debug, Clone, Default)]
pub struct MockPicker {
    /// Steps replayed in order
    pub script: Vec<Step>,
    /// Whether to simulate user abort at the end
    pub should_abort: bool,
}

impl MockPicker {
    /// Create a new mock picker from a script
    #[must_use]
    pub const fn new(script: Vec<Step>) -> Self {
        Self {
            script,
            should_abort: false,
        }
    }

    /// Create a mock picker that simulates user abort
    #[must_use]
    pub const fn aborted(script: Vec<Step>) -> Self {
        Self {
            script,
            should_abort: true,
        }
    }
}

impl Picker for MockPicker {
    fn run(&self, config: PickerConfig) -> Result<PickResult> {
        config.validate()?;

        let clock = ManualClock::new();
        let mut controller =
            SelectionController::with_clock(config.items, config.debounce, clock.clone());

        for step in &self.script {
            match step {
                Step::Event(event) => {
                    controller.handle(event.clone());
                }
                Step::Wait(duration) => {
                    clock.advance(*duration);
                    controller.tick();
                }
            }
        }

        let result = if self.should_abort {
            PickResult::aborted()
        } else {
            PickResult::selected(controller.selected_items().into_iter().cloned().collect())
        };
        controller.teardown();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::Item;
    use crate::ui::UiError;

    fn fruits() -> Vec<Item> {
        vec![
            Item::new("1", "Apple"),
            Item::new("2", "Banana"),
            Item::new("3", "Cherry"),
        ]
    }

    fn activate(id: &str, name: &str) -> Step {
        Step::Event(ControllerEvent::ItemActivated(Item::new(id, name)))
    }

    #[test]
    fn test_mock_picker_returns_pick_order() {
        let picker = MockPicker::new(vec![activate("3", "Cherry"), activate("1", "Apple")]);
        let config = PickerConfig::new(fruits(), "test: ".to_string());
        let result = picker.run(config).unwrap();

        assert!(!result.aborted);
        assert_eq!(
            result.selected,
            vec![Item::new("3", "Cherry"), Item::new("1", "Apple")]
        );
    }

    #[test]
    fn test_mock_picker_aborted() {
        let picker = MockPicker::aborted(vec![activate("1", "Apple")]);
        let config = PickerConfig::new(fruits(), "test: ".to_string());
        let result = picker.run(config).unwrap();

        assert!(result.aborted);
        assert!(result.selected.is_empty());
    }

    #[test]
    fn test_selection_survives_search_and_reload() {
        let picker = MockPicker::new(vec![
            Step::Event(ControllerEvent::QueryTextChanged("ban".into())),
            Step::Wait(Duration::from_millis(300)),
            activate("2", "Banana"),
            Step::Event(ControllerEvent::ClearRequested),
            Step::Event(ControllerEvent::SourceReplaced(vec![
                Item::new("2", "Banana"),
                Item::new("4", "Date"),
            ])),
            activate("4", "Date"),
        ]);
        let config = PickerConfig::new(fruits(), "test: ".to_string());
        let result = picker.run(config).unwrap();

        assert_eq!(
            result.selected,
            vec![Item::new("2", "Banana"), Item::new("4", "Date")]
        );
    }

    #[test]
    fn test_mock_picker_rejects_empty_ids() {
        let picker = MockPicker::default();
        let config = PickerConfig::new(vec![Item::new("", "Nameless")], "test: ".to_string());

        assert!(matches!(
            picker.run(config),
            Err(UiError::InvalidConfig(_))
        ));
    }
}
