use crate::core::node::{self, Node};
use crate::core::record::FieldId;
use crate::core::validation::StepValidator;
use crate::core::value::Value;

pub struct Step {
    pub label: String,
    pub hint: Option<String>,
    pub nodes: Vec<Node>,
    pub step_validators: Vec<StepValidator>,
}

impl Step {
    pub fn input_ids(&self) -> Vec<FieldId> {
        node::input_ids(&self.nodes)
    }

    /// Snapshot of the step's current field values, in node order.
    pub fn values(&self) -> Vec<(FieldId, Value)> {
        self.nodes
            .iter()
            .filter_map(|node| node.as_input())
            .map(|input| (input.id().to_string(), input.value_typed()))
            .collect()
    }
}
