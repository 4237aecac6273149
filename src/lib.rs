pub mod core;
pub mod error;
pub mod inputs;
pub mod submit;
pub mod terminal;
pub mod ui;

pub use core::action_bindings;
pub use core::app;
pub use core::event;
pub use core::event_queue;
pub use core::form_engine;
pub use core::node;
pub use core::record;
pub use core::reducer;
pub use core::state;
pub use core::step;
pub use core::step_builder;
pub use core::validation;
pub use core::value;
pub use core::wizard;

pub use error::WizardError;

pub use inputs::checkbox_input;
pub use inputs::number_input;
pub use inputs::text_input;
pub use inputs::validators;

pub use terminal::terminal_event;

pub use ui::frame;
pub use ui::layout;
pub use ui::renderer;
pub use ui::span;
pub use ui::spinner;
pub use ui::style;
pub use ui::theme;
