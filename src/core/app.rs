use crate::core::action_bindings::ActionBindings;
use crate::core::event::Action;
use crate::core::event_queue::{AppEvent, EventQueue};
use crate::core::record::Record;
use crate::core::reducer::{Effect, Reducer};
use crate::core::state::AppState;
use crate::core::wizard::Wizard;
use crate::submit::{SubmitError, SubmitHandler, SubmitRunner};
use crate::terminal::{KeyEvent, Terminal};
use crate::ui::renderer::Renderer;
use crate::ui::spinner::Spinner;
use crate::ui::theme::Theme;
use std::io;
use std::time::{Duration, Instant};

const ERROR_TIMEOUT: Duration = Duration::from_secs(2);

pub struct App {
    pub state: AppState,
    pub renderer: Renderer,
    action_bindings: ActionBindings,
    event_queue: EventQueue,
    submit: SubmitRunner,
    spinner: Spinner,
    theme: Theme,
    submitted: Option<Record>,
}

impl App {
    pub fn new(wizard: Wizard, handler: SubmitHandler) -> Self {
        Self {
            state: AppState::new(wizard),
            renderer: Renderer::new(),
            action_bindings: ActionBindings::new(),
            event_queue: EventQueue::new(),
            submit: SubmitRunner::new(handler),
            spinner: Spinner::default(),
            theme: Theme::default_theme(),
            submitted: None,
        }
    }

    pub fn tick(&mut self) -> bool {
        let mut processed_any = false;

        if let Some(result) = self.submit.poll() {
            self.event_queue
                .emit(AppEvent::Action(Action::SubmitFinished(result)));
        }

        loop {
            let now = Instant::now();
            let Some(event) = self.event_queue.next_ready(now) else {
                break;
            };
            self.dispatch_event(event);
            processed_any = true;
        }

        if self.state.wizard.submitting() {
            self.spinner.tick();
            processed_any = true;
        }

        processed_any
    }

    pub fn render(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        let spinner = self
            .state
            .wizard
            .submitting()
            .then_some(&self.spinner);
        self.renderer.render(&self.state, &self.theme, spinner, terminal)
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        self.event_queue.emit(AppEvent::Key(key_event));
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    /// The record handed to the submit handler, if a submit was started.
    pub fn submitted_record(&self) -> Option<&Record> {
        self.submitted.as_ref()
    }

    pub fn completed(&self) -> bool {
        self.state.wizard.completed()
    }

    pub fn take_submit_error(&mut self) -> Option<SubmitError> {
        self.state.submit_error.take()
    }

    fn dispatch_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key_event) => {
                // While the submit is in flight only Exit gets through.
                if self.state.wizard.submitting() {
                    if let Some(Action::Exit) = self.action_bindings.resolve(&key_event) {
                        let effects =
                            Reducer::reduce(&mut self.state, Action::Exit, ERROR_TIMEOUT);
                        self.apply_effects(effects);
                    }
                    return;
                }

                let captured = self
                    .state
                    .focused_caps()
                    .map(|caps| caps.captures_key(key_event.code, key_event.modifiers))
                    .unwrap_or(false);

                if !captured {
                    if let Some(action) = self.action_bindings.resolve(&key_event) {
                        let effects = Reducer::reduce(&mut self.state, action, ERROR_TIMEOUT);
                        self.apply_effects(effects);
                        return;
                    }
                }

                let effects =
                    Reducer::reduce(&mut self.state, Action::InputKey(key_event), ERROR_TIMEOUT);
                self.apply_effects(effects);
            }
            AppEvent::Action(action) => {
                let effects = Reducer::reduce(&mut self.state, action, ERROR_TIMEOUT);
                self.apply_effects(effects);
            }
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::EmitAfter(event, delay) => self.event_queue.emit_after(event, delay),
                Effect::CancelClearError(id) => self.event_queue.cancel_clear_error_message(&id),
                Effect::StartSubmit(record) => {
                    self.submitted = Some(record.clone());
                    self.submit.start(record);
                }
            }
        }
    }
}
