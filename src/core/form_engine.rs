use crate::core::form_event::FormEvent;
use crate::core::node::{self, Node};
use crate::core::record::FieldId;
use crate::core::validation;
use crate::inputs::{Input, InputCaps, KeyResult};
use crate::terminal::KeyEvent;

/// Focus management and key routing over the active step's inputs.
pub struct FormEngine {
    input_ids: Vec<FieldId>,
    focus_index: Option<usize>,
}

impl FormEngine {
    pub fn from_nodes(nodes: &mut [Node]) -> Self {
        let mut engine = Self {
            input_ids: node::input_ids(nodes),
            focus_index: None,
        };

        if !engine.input_ids.is_empty() {
            engine.set_focus_internal(nodes, Some(0));
        }

        engine
    }

    pub fn reset_with_nodes(&mut self, nodes: &mut [Node]) {
        self.clear_focus(nodes);
        self.input_ids = node::input_ids(nodes);

        if !self.input_ids.is_empty() {
            self.set_focus_internal(nodes, Some(0));
        }
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus_index
    }

    pub fn focused_id(&self) -> Option<&FieldId> {
        self.focus_index.and_then(|i| self.input_ids.get(i))
    }

    pub fn focused_input<'a>(&self, nodes: &'a [Node]) -> Option<&'a dyn Input> {
        self.focused_id().and_then(|id| node::find_input(nodes, id))
    }

    pub fn focused_input_mut<'a>(&self, nodes: &'a mut [Node]) -> Option<&'a mut dyn Input> {
        let id = self.focused_id()?.clone();
        node::find_input_mut(nodes, &id)
    }

    pub fn focused_caps(&self, nodes: &[Node]) -> Option<InputCaps> {
        self.focused_input(nodes).map(|input| input.capabilities())
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.input_ids.iter().position(|i| i == id)
    }

    pub fn move_focus(&mut self, nodes: &mut [Node], direction: isize) -> Vec<FormEvent> {
        if self.input_ids.is_empty() {
            return vec![];
        }

        let current = self.focus_index.unwrap_or(0);
        let len = self.input_ids.len() as isize;
        let next = ((current as isize + direction + len) % len) as usize;

        let mut events = Vec::new();
        self.set_focus(nodes, Some(next), &mut events);
        events
    }

    pub fn set_focus(
        &mut self,
        nodes: &mut [Node],
        new_index: Option<usize>,
        events: &mut Vec<FormEvent>,
    ) {
        let from_id = self.focused_id().cloned();
        let to_id = new_index.and_then(|i| self.input_ids.get(i)).cloned();

        if from_id == to_id {
            return;
        }

        self.set_focus_internal(nodes, new_index);
        events.push(FormEvent::FocusChanged {
            from: from_id,
            to: to_id,
        });
    }

    pub fn clear_focus(&mut self, nodes: &mut [Node]) {
        if let Some(id) = self.focused_id().cloned() {
            if let Some(input) = node::find_input_mut(nodes, &id) {
                input.set_focused(false);
            }
        }
        self.focus_index = None;
    }

    pub fn advance_focus(&mut self, nodes: &mut [Node], events: &mut Vec<FormEvent>) -> bool {
        let Some(current) = self.focus_index else {
            return false;
        };

        let next = current + 1;
        if next < self.input_ids.len() {
            self.set_focus(nodes, Some(next), events);
            true
        } else {
            false
        }
    }

    pub fn handle_key(&mut self, nodes: &mut [Node], key: KeyEvent) -> Vec<FormEvent> {
        self.update_focused_input(nodes, |input| {
            Some(input.handle_key(key.code, key.modifiers))
        })
    }

    pub fn handle_delete_word(&mut self, nodes: &mut [Node], forward: bool) -> Vec<FormEvent> {
        self.update_focused_input(nodes, |input| {
            if forward {
                input.delete_word_forward();
            } else {
                input.delete_word();
            }
            None
        })
    }

    pub fn validate_focused(&self, nodes: &mut [Node]) -> Result<(), (FieldId, String)> {
        let Some(id) = self.focused_id().cloned() else {
            return Ok(());
        };

        let Some(input) = node::find_input_mut(nodes, &id) else {
            return Ok(());
        };

        match validation::validate_input(input) {
            Ok(()) => {
                input.set_error(None);
                Ok(())
            }
            Err(err) => {
                input.set_error(Some(err.clone()));
                Err((id, err))
            }
        }
    }

    pub fn apply_errors(
        &mut self,
        nodes: &mut [Node],
        errors: &[(FieldId, String)],
    ) -> Vec<FieldId> {
        let mut scheduled = Vec::new();

        for id in &self.input_ids {
            let Some(input) = node::find_input_mut(nodes, id) else {
                continue;
            };

            if let Some((_, err)) = errors.iter().find(|(eid, _)| eid == id) {
                input.set_error(Some(err.clone()));
                scheduled.push(id.clone());
            } else {
                input.set_error(None);
            }
        }

        scheduled
    }

    pub fn clear_error(&self, nodes: &mut [Node], id: &str) {
        if let Some(input) = node::find_input_mut(nodes, id) {
            input.set_error(None);
        }
    }

    fn set_focus_internal(&mut self, nodes: &mut [Node], new_index: Option<usize>) {
        if let Some(id) = self.focused_id().cloned() {
            if let Some(input) = node::find_input_mut(nodes, &id) {
                input.set_focused(false);
            }
        }

        if let Some(idx) = new_index {
            if let Some(id) = self.input_ids.get(idx).cloned() {
                if let Some(input) = node::find_input_mut(nodes, &id) {
                    input.set_focused(true);
                }
            }
        }

        self.focus_index = new_index;
    }

    fn update_focused_input<F>(&mut self, nodes: &mut [Node], update: F) -> Vec<FormEvent>
    where
        F: FnOnce(&mut dyn Input) -> Option<KeyResult>,
    {
        let Some(id) = self.focused_id().cloned() else {
            return vec![];
        };

        let Some(input) = node::find_input_mut(nodes, &id) else {
            return vec![];
        };

        let before = input.value();
        let result = update(input);
        let after = input.value();

        let mut events = Vec::new();

        if before != after {
            events.push(FormEvent::InputChanged {
                id: id.clone(),
                value: after,
            });
            events.push(FormEvent::ErrorCancelled { id: id.clone() });
            input.set_error(None);
        }

        if matches!(result, Some(KeyResult::Submit)) {
            events.push(FormEvent::SubmitRequested);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::FormEngine;
    use crate::core::form_event::FormEvent;
    use crate::core::node::Node;
    use crate::inputs::text_input::TextInput;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

    fn nodes() -> Vec<Node> {
        vec![
            Node::input(TextInput::new("first_name", "First Name")),
            Node::text("between the fields"),
            Node::input(TextInput::new("last_name", "Last Name")),
        ]
    }

    #[test]
    fn focus_starts_on_first_input_and_wraps() {
        let mut nodes = nodes();
        let mut engine = FormEngine::from_nodes(&mut nodes);
        assert_eq!(engine.focused_id().map(String::as_str), Some("first_name"));

        engine.move_focus(&mut nodes, 1);
        assert_eq!(engine.focused_id().map(String::as_str), Some("last_name"));

        engine.move_focus(&mut nodes, 1);
        assert_eq!(engine.focused_id().map(String::as_str), Some("first_name"));
    }

    #[test]
    fn typing_emits_input_changed_and_enter_requests_submit() {
        let mut nodes = nodes();
        let mut engine = FormEngine::from_nodes(&mut nodes);

        let events = engine.handle_key(
            &mut nodes,
            KeyEvent {
                code: KeyCode::Char('A'),
                modifiers: KeyModifiers::NONE,
            },
        );
        assert!(matches!(&events[0], FormEvent::InputChanged { id, value }
            if id == "first_name" && value == "A"));

        let events = engine.handle_key(
            &mut nodes,
            KeyEvent {
                code: KeyCode::Enter,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert!(events
            .iter()
            .any(|e| matches!(e, FormEvent::SubmitRequested)));
    }
}
