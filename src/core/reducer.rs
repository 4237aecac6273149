use crate::core::event::Action;
use crate::core::event_queue::AppEvent;
use crate::core::form_event::FormEvent;
use crate::core::record::{FieldId, Record};
use crate::core::state::AppState;
use crate::core::wizard::AdvanceOutcome;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Effect {
    EmitAfter(AppEvent, Duration),
    CancelClearError(FieldId),
    StartSubmit(Record),
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, action: Action, error_timeout: Duration) -> Vec<Effect> {
        match action {
            Action::Exit => {
                state.should_exit = true;
                vec![]
            }
            Action::Cancel => {
                state.wizard.cancel_current();
                state.should_exit = true;
                vec![]
            }
            Action::NextInput => {
                let nodes = state.wizard.current_step_mut().nodes.as_mut_slice();
                let events = state.engine.move_focus(nodes, 1);
                Self::form_events_to_effects(events)
            }
            Action::PrevInput => {
                let nodes = state.wizard.current_step_mut().nodes.as_mut_slice();
                let events = state.engine.move_focus(nodes, -1);
                Self::form_events_to_effects(events)
            }
            Action::Back => {
                if state.wizard.submitting() {
                    return vec![];
                }
                {
                    let nodes = state.wizard.current_step_mut().nodes.as_mut_slice();
                    state.engine.clear_focus(nodes);
                }
                if state.wizard.retreat() {
                    state.reset_engine_for_current_step();
                }
                vec![]
            }
            Action::Submit => Self::handle_submit(state, error_timeout),
            Action::DeleteWord => {
                let nodes = state.wizard.current_step_mut().nodes.as_mut_slice();
                let events = state.engine.handle_delete_word(nodes, false);
                Self::form_events_to_effects(events)
            }
            Action::DeleteWordForward => {
                let nodes = state.wizard.current_step_mut().nodes.as_mut_slice();
                let events = state.engine.handle_delete_word(nodes, true);
                Self::form_events_to_effects(events)
            }
            Action::InputKey(key_event) => {
                let nodes = state.wizard.current_step_mut().nodes.as_mut_slice();
                let events = state.engine.handle_key(nodes, key_event);

                let has_submit = events
                    .iter()
                    .any(|e| matches!(e, FormEvent::SubmitRequested));
                let mut effects = Self::form_events_to_effects(events);
                if has_submit {
                    effects.extend(Self::handle_submit(state, error_timeout));
                }
                effects
            }
            Action::ClearErrorMessage(id) => {
                let nodes = state.wizard.current_step_mut().nodes.as_mut_slice();
                state.engine.clear_error(nodes, &id);
                vec![]
            }
            Action::SubmitFinished(result) => {
                match result {
                    Ok(()) => state.wizard.finish_submit(),
                    Err(err) => {
                        state.wizard.fail_submit();
                        state.submit_error = Some(err);
                    }
                }
                state.should_exit = true;
                vec![]
            }
        }
    }

    // Edits and focus moves mutate state directly; the only engine event
    // with a deferred consequence is a cancelled error timeout.
    fn form_events_to_effects(events: Vec<FormEvent>) -> Vec<Effect> {
        events
            .into_iter()
            .filter_map(|event| match event {
                FormEvent::ErrorCancelled { id } => Some(Effect::CancelClearError(id)),
                FormEvent::InputChanged { .. }
                | FormEvent::FocusChanged { .. }
                | FormEvent::SubmitRequested => None,
            })
            .collect()
    }

    fn handle_submit(state: &mut AppState, error_timeout: Duration) -> Vec<Effect> {
        if state.wizard.submitting() {
            return vec![];
        }

        let mut effects = Vec::new();

        if Self::validate_focused(state, error_timeout, &mut effects) {
            return effects;
        }

        if Self::advance_focus(state, &mut effects) {
            return effects;
        }

        match state.wizard.advance() {
            AdvanceOutcome::Moved => {
                state.reset_engine_for_current_step();
                effects
            }
            AdvanceOutcome::SubmitReady(record) => {
                {
                    let nodes = state.wizard.current_step_mut().nodes.as_mut_slice();
                    state.engine.clear_focus(nodes);
                }
                effects.push(Effect::StartSubmit(record));
                effects
            }
            AdvanceOutcome::Blocked(errors) => {
                Self::apply_errors_and_focus(state, &errors, error_timeout, &mut effects);
                effects
            }
        }
    }

    fn validate_focused(
        state: &mut AppState,
        error_timeout: Duration,
        effects: &mut Vec<Effect>,
    ) -> bool {
        let nodes = state.wizard.current_step_mut().nodes.as_mut_slice();
        if let Err((id, _err)) = state.engine.validate_focused(nodes) {
            effects.push(Effect::CancelClearError(id.clone()));
            effects.push(Effect::EmitAfter(
                AppEvent::Action(Action::ClearErrorMessage(id)),
                error_timeout,
            ));
            return true;
        }
        false
    }

    fn advance_focus(state: &mut AppState, effects: &mut Vec<Effect>) -> bool {
        let mut focus_events = Vec::new();
        let nodes = state.wizard.current_step_mut().nodes.as_mut_slice();
        if state.engine.advance_focus(nodes, &mut focus_events) {
            effects.extend(Self::form_events_to_effects(focus_events));
            return true;
        }
        false
    }

    fn apply_errors_and_focus(
        state: &mut AppState,
        errors: &[(FieldId, String)],
        error_timeout: Duration,
        effects: &mut Vec<Effect>,
    ) {
        let scheduled_ids = {
            let nodes = state.wizard.current_step_mut().nodes.as_mut_slice();
            state.engine.apply_errors(nodes, errors)
        };

        for id in scheduled_ids {
            effects.push(Effect::EmitAfter(
                AppEvent::Action(Action::ClearErrorMessage(id)),
                error_timeout,
            ));
        }

        if let Some((first_id, _)) = errors.first() {
            if let Some(idx) = state.engine.find_index_by_id(first_id) {
                let mut focus_events = Vec::new();
                let nodes = state.wizard.current_step_mut().nodes.as_mut_slice();
                state.engine.set_focus(nodes, Some(idx), &mut focus_events);
                effects.extend(Self::form_events_to_effects(focus_events));
            }
        }
    }
}
