use crate::core::node::Node;
use crate::core::record::FieldId;
use crate::core::step::Step;
use crate::core::validation::{StepValidator, ValidationContext};
use crate::inputs::Input;

pub struct StepBuilder {
    label: String,
    hint: Option<String>,
    nodes: Vec<Node>,
    validators: Vec<StepValidator>,
}

impl StepBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hint: None,
            nodes: Vec::new(),
            validators: Vec::new(),
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn input(mut self, input: impl Input + 'static) -> Self {
        self.nodes.push(Node::input(input));
        self
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.nodes.push(Node::text(content));
        self
    }

    pub fn separator(mut self) -> Self {
        self.nodes.push(Node::Separator);
        self
    }

    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&ValidationContext) -> Vec<(FieldId, String)> + Send + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn build(self) -> Step {
        Step {
            label: self.label,
            hint: self.hint,
            nodes: self.nodes,
            step_validators: self.validators,
        }
    }
}
