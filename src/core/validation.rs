use crate::core::record::{FieldId, Record};
use crate::core::step::Step;
use crate::core::value::Value;
use crate::inputs::Input;
use std::collections::HashMap;

pub type StepValidator = Box<dyn Fn(&ValidationContext) -> Vec<(FieldId, String)> + Send>;

/// Values visible to a step-level rule: the step's own fields layered over
/// the record accumulated by earlier steps.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    values: HashMap<FieldId, Value>,
}

impl ValidationContext {
    pub fn new(step: &Step, record: &Record) -> Self {
        let mut values = HashMap::new();
        for (id, value) in record.iter() {
            values.insert(id.clone(), value.clone());
        }
        for (id, value) in step.values() {
            values.insert(id, value);
        }
        Self { values }
    }

    pub fn value(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.value(id).and_then(|v| v.as_text())
    }

    pub fn flag(&self, id: &str) -> bool {
        self.value(id).and_then(|v| v.as_bool()).unwrap_or(false)
    }

    pub fn number(&self, id: &str) -> Option<f64> {
        self.value(id).and_then(|v| v.as_number())
    }
}

pub fn validate_input(input: &dyn Input) -> Result<(), String> {
    let raw = input.value();
    if raw.is_empty() {
        return run_validators(input, &raw);
    }
    if !input.is_complete() {
        return Err("Incomplete value".to_string());
    }
    input.validate_internal()?;
    run_validators(input, &raw)
}

/// Validates exactly the given step: its own fields first, then its
/// step-level rules against the layered context.
pub fn validate_step(step: &Step, record: &Record) -> Vec<(FieldId, String)> {
    let mut errors: Vec<(FieldId, String)> = step
        .nodes
        .iter()
        .filter_map(|node| node.as_input())
        .filter_map(|input| {
            validate_input(input)
                .err()
                .map(|err| (input.id().to_string(), err))
        })
        .collect();

    let ctx = ValidationContext::new(step, record);
    for validator in &step.step_validators {
        errors.extend(validator(&ctx));
    }

    errors
}

fn run_validators(input: &dyn Input, value: &str) -> Result<(), String> {
    for validator in input.validators() {
        validator(value)?;
    }
    Ok(())
}
