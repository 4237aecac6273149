pub mod action_bindings;
pub mod app;
pub mod event;
pub mod event_queue;
pub mod form_engine;
pub mod form_event;
pub mod node;
pub mod record;
pub mod reducer;
pub mod state;
pub mod step;
pub mod step_builder;
pub mod validation;
pub mod value;
pub mod wizard;
