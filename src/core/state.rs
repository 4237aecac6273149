use crate::core::form_engine::FormEngine;
use crate::core::wizard::Wizard;
use crate::inputs::InputCaps;
use crate::submit::SubmitError;

pub struct AppState {
    pub wizard: Wizard,
    pub engine: FormEngine,
    pub should_exit: bool,
    pub submit_error: Option<SubmitError>,
}

impl AppState {
    pub fn new(mut wizard: Wizard) -> Self {
        let nodes = wizard.current_step_mut().nodes.as_mut_slice();
        let engine = FormEngine::from_nodes(nodes);

        Self {
            wizard,
            engine,
            should_exit: false,
            submit_error: None,
        }
    }

    pub fn reset_engine_for_current_step(&mut self) {
        let nodes = self.wizard.current_step_mut().nodes.as_mut_slice();
        self.engine.reset_with_nodes(nodes);
    }

    pub fn focused_caps(&self) -> Option<InputCaps> {
        self.engine.focused_caps(&self.wizard.current_step().nodes)
    }
}
