//! Mock UI for tests.

use crate::error::Result;

use super::{ErrorAction, OutputMode, UserInterface};

/// A recorded UI call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    ErrorWithActions(String),
    Header(String),
}

/// Records every UI interaction and answers notifications with a scripted
/// action.
pub struct MockUI {
    /// All calls in order.
    pub calls: Vec<MockCall>,
    /// The action returned from `error_with_actions`.
    pub scripted_action: ErrorAction,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create a mock that dismisses every notification.
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            scripted_action: ErrorAction::Dismiss,
        }
    }

    /// Create a mock that answers notifications with the given action.
    pub fn answering(action: ErrorAction) -> Self {
        Self {
            calls: Vec::new(),
            scripted_action: action,
        }
    }

    /// All error notifications shown (with or without actions).
    pub fn errors(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                MockCall::Error(m) | MockCall::ErrorWithActions(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All warning messages shown.
    pub fn warnings(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                MockCall::Warning(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.calls.push(MockCall::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.calls.push(MockCall::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.calls.push(MockCall::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.calls.push(MockCall::Error(msg.to_string()));
    }

    fn error_with_actions(&mut self, msg: &str, _actions: &[ErrorAction]) -> Result<ErrorAction> {
        self.calls.push(MockCall::ErrorWithActions(msg.to_string()));
        Ok(self.scripted_action)
    }

    fn show_header(&mut self, title: &str) {
        self.calls.push(MockCall::Header(title.to_string()));
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
