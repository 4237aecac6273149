use crate::core::event::Action;
use crate::terminal::KeyEvent;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Action(Action),
}

#[derive(Debug, Clone)]
struct ScheduledEvent {
    due: Instant,
    event: AppEvent,
}

pub struct EventQueue {
    queue: VecDeque<AppEvent>,
    scheduled: Vec<ScheduledEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            scheduled: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: AppEvent) {
        self.queue.push_back(event);
    }

    pub fn emit_after(&mut self, event: AppEvent, delay: Duration) {
        self.scheduled.push(ScheduledEvent {
            due: Instant::now() + delay,
            event,
        });
    }

    pub fn cancel_clear_error_message(&mut self, id: &str) {
        self.queue.retain(|queued| match queued {
            AppEvent::Action(Action::ClearErrorMessage(queued_id)) => queued_id != id,
            _ => true,
        });
        self.scheduled.retain(|scheduled| match &scheduled.event {
            AppEvent::Action(Action::ClearErrorMessage(scheduled_id)) => scheduled_id != id,
            _ => true,
        });
    }

    pub fn next_ready(&mut self, now: Instant) -> Option<AppEvent> {
        self.move_due_to_queue(now);
        self.queue.pop_front()
    }

    fn move_due_to_queue(&mut self, now: Instant) {
        let mut due = Vec::new();
        self.scheduled.retain(|scheduled| {
            if scheduled.due <= now {
                due.push(scheduled.event.clone());
                false
            } else {
                true
            }
        });
        self.queue.extend(due);
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{AppEvent, EventQueue};
    use crate::core::event::Action;
    use std::time::{Duration, Instant};

    #[test]
    fn delayed_events_become_ready_after_their_due_time() {
        let mut queue = EventQueue::new();
        queue.emit_after(
            AppEvent::Action(Action::ClearErrorMessage("money".to_string())),
            Duration::from_millis(50),
        );

        assert!(queue.next_ready(Instant::now()).is_none());
        let later = Instant::now() + Duration::from_millis(60);
        assert!(queue.next_ready(later).is_some());
    }

    #[test]
    fn cancel_drops_pending_clears_for_one_field_only() {
        let mut queue = EventQueue::new();
        queue.emit(AppEvent::Action(Action::ClearErrorMessage("a".to_string())));
        queue.emit(AppEvent::Action(Action::ClearErrorMessage("b".to_string())));

        queue.cancel_clear_error_message("a");

        match queue.next_ready(Instant::now()) {
            Some(AppEvent::Action(Action::ClearErrorMessage(id))) => assert_eq!(id, "b"),
            other => panic!("expected clear for b, got {other:?}"),
        }
    }
}
