use crate::core::record::{FieldId, Record};
use crate::core::step::Step;
use crate::core::validation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Done,
    Cancelled,
}

/// Result of asking the wizard to move past the current step.
pub enum AdvanceOutcome {
    /// Validation failed; the index did not change.
    Blocked(Vec<(FieldId, String)>),
    /// Moved to the next step.
    Moved,
    /// The last step passed; the accumulated record is ready for the
    /// terminal submit handler.
    SubmitReady(Record),
}

pub struct Wizard {
    steps: Vec<Step>,
    current: usize,
    statuses: Vec<StepStatus>,
    record: Record,
    submitting: bool,
    completed: bool,
}

impl Wizard {
    /// Panics when `steps` is empty; a wizard always has a current step.
    pub fn new(steps: Vec<Step>) -> Self {
        assert!(!steps.is_empty(), "a wizard needs at least one step");

        let mut statuses = vec![StepStatus::Pending; steps.len()];
        statuses[0] = StepStatus::Active;

        Self {
            steps,
            current: 0,
            statuses,
            record: Record::new(),
            submitting: false,
            completed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn current_step_mut(&mut self) -> &mut Step {
        &mut self.steps[self.current]
    }

    pub fn step_at(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn status_at(&self, index: usize) -> StepStatus {
        self.statuses
            .get(index)
            .copied()
            .unwrap_or(StepStatus::Pending)
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.steps.len()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn validate_current(&self) -> Vec<(FieldId, String)> {
        validation::validate_step(self.current_step(), &self.record)
    }

    /// Validates the current step and moves past it. Only the current
    /// step's rules run. On the last step no index change happens; the
    /// caller gets the full record to hand to the submit handler and the
    /// wizard stays locked until `finish_submit` or `fail_submit`.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.submitting {
            return AdvanceOutcome::Blocked(Vec::new());
        }

        let errors = self.validate_current();
        if !errors.is_empty() {
            return AdvanceOutcome::Blocked(errors);
        }

        let values = self.current_step().values();
        self.record.merge(values);

        if self.has_next() {
            self.statuses[self.current] = StepStatus::Done;
            self.current += 1;
            self.statuses[self.current] = StepStatus::Active;
            return AdvanceOutcome::Moved;
        }

        self.submitting = true;
        AdvanceOutcome::SubmitReady(self.record.clone())
    }

    /// Steps back without validating. Values stay in the inputs and in
    /// the record.
    pub fn retreat(&mut self) -> bool {
        if self.submitting || self.current == 0 {
            return false;
        }

        self.statuses[self.current] = StepStatus::Pending;
        self.current -= 1;
        self.statuses[self.current] = StepStatus::Active;
        true
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
        self.completed = true;
        self.reset();
    }

    pub fn fail_submit(&mut self) {
        self.submitting = false;
    }

    pub fn cancel_current(&mut self) {
        if let Some(status) = self.statuses.get_mut(self.current) {
            *status = StepStatus::Cancelled;
        }
    }

    fn reset(&mut self) {
        for step in &mut self.steps {
            for node in &mut step.nodes {
                if let Some(input) = node.as_input_mut() {
                    input.set_value(String::new());
                    input.set_error(None);
                }
            }
        }
        self.record.clear();
        self.current = 0;
        for status in &mut self.statuses {
            *status = StepStatus::Pending;
        }
        if let Some(first) = self.statuses.first_mut() {
            *first = StepStatus::Active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AdvanceOutcome, StepStatus, Wizard};
    use crate::core::node;
    use crate::core::step_builder::StepBuilder;
    use crate::core::value::Value;
    use crate::inputs::text_input::TextInput;
    use crate::inputs::validators;

    fn two_step_wizard() -> Wizard {
        let first = StepBuilder::new("General Info")
            .input(TextInput::new("first_name", "First Name").with_validator(validators::required()))
            .build();
        let second = StepBuilder::new("More Info")
            .input(TextInput::new("description", "Description"))
            .build();
        Wizard::new(vec![first, second])
    }

    fn type_into(wizard: &mut Wizard, id: &str, value: &str) {
        let nodes = wizard.current_step_mut().nodes.as_mut_slice();
        node::find_input_mut(nodes, id)
            .expect("input should exist on the current step")
            .set_value(value.to_string());
    }

    #[test]
    #[should_panic(expected = "at least one step")]
    fn construction_rejects_an_empty_step_list() {
        Wizard::new(Vec::new());
    }

    #[test]
    fn blocked_advance_keeps_the_index() {
        let mut wizard = two_step_wizard();

        match wizard.advance() {
            AdvanceOutcome::Blocked(errors) => {
                assert_eq!(errors[0].0, "first_name");
            }
            _ => panic!("advance should be blocked by the required field"),
        }
        assert_eq!(wizard.current_index(), 0);
        assert!(wizard.record().is_empty());
    }

    #[test]
    fn values_survive_back_and_forward_navigation() {
        let mut wizard = two_step_wizard();
        type_into(&mut wizard, "first_name", "Ada");

        assert!(matches!(wizard.advance(), AdvanceOutcome::Moved));
        assert_eq!(wizard.current_index(), 1);
        assert_eq!(
            wizard.record().get("first_name"),
            Some(&Value::Text("Ada".to_string()))
        );

        assert!(wizard.retreat());
        assert_eq!(wizard.current_index(), 0);
        let kept = wizard.current_step().values();
        assert_eq!(kept[0].1, Value::Text("Ada".to_string()));
        assert_eq!(
            wizard.record().get("first_name"),
            Some(&Value::Text("Ada".to_string()))
        );
    }

    #[test]
    fn retreat_at_first_step_is_a_noop() {
        let mut wizard = two_step_wizard();
        assert!(!wizard.retreat());
        assert_eq!(wizard.current_index(), 0);
    }

    #[test]
    fn advance_from_non_final_step_never_submits() {
        let mut wizard = two_step_wizard();
        type_into(&mut wizard, "first_name", "Ada");

        match wizard.advance() {
            AdvanceOutcome::Moved => {}
            AdvanceOutcome::SubmitReady(_) => panic!("non-final step must not submit"),
            AdvanceOutcome::Blocked(_) => panic!("valid step must advance"),
        }
        assert_eq!(wizard.current_index(), 1);
        assert!(!wizard.submitting());
        assert_eq!(wizard.status_at(0), StepStatus::Done);
        assert_eq!(wizard.status_at(1), StepStatus::Active);
    }

    #[test]
    fn final_advance_yields_the_full_record_once() {
        let mut wizard = two_step_wizard();
        type_into(&mut wizard, "first_name", "Ada");
        assert!(matches!(wizard.advance(), AdvanceOutcome::Moved));
        type_into(&mut wizard, "description", "mathematician");

        match wizard.advance() {
            AdvanceOutcome::SubmitReady(record) => {
                assert_eq!(record.len(), 2);
                assert_eq!(
                    record.get("first_name"),
                    Some(&Value::Text("Ada".to_string()))
                );
                assert_eq!(
                    record.get("description"),
                    Some(&Value::Text("mathematician".to_string()))
                );
            }
            _ => panic!("final valid step must produce the record"),
        }
        assert!(wizard.submitting());

        // A second advance while the submit is in flight is rejected.
        match wizard.advance() {
            AdvanceOutcome::Blocked(errors) => assert!(errors.is_empty()),
            _ => panic!("re-entrant submit must be blocked"),
        }
    }

    #[test]
    fn finish_submit_completes_and_resets() {
        let mut wizard = two_step_wizard();
        type_into(&mut wizard, "first_name", "Ada");
        assert!(matches!(wizard.advance(), AdvanceOutcome::Moved));
        assert!(matches!(wizard.advance(), AdvanceOutcome::SubmitReady(_)));

        wizard.finish_submit();
        assert!(wizard.completed());
        assert!(!wizard.submitting());
        assert_eq!(wizard.current_index(), 0);
        assert!(wizard.record().is_empty());
        assert_eq!(wizard.current_step().values()[0].1, Value::Text(String::new()));
        assert_eq!(wizard.status_at(0), StepStatus::Active);
        assert_eq!(wizard.status_at(1), StepStatus::Pending);
    }
}
