use crate::core::record::FieldId;
use crate::inputs::Input;

pub enum Node {
    Input(Box<dyn Input>),
    Text(String),
    Separator,
}

impl Node {
    pub fn input(input: impl Input + 'static) -> Self {
        Node::Input(Box::new(input))
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Node::Input(input) => Some(input.id()),
            _ => None,
        }
    }

    pub fn as_input(&self) -> Option<&dyn Input> {
        match self {
            Node::Input(input) => Some(input.as_ref()),
            _ => None,
        }
    }

    pub fn as_input_mut(&mut self) -> Option<&mut dyn Input> {
        match self {
            Node::Input(input) => Some(input.as_mut()),
            _ => None,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Node::Input(_))
    }
}

pub fn input_ids(nodes: &[Node]) -> Vec<FieldId> {
    nodes
        .iter()
        .filter_map(|node| node.as_input())
        .map(|input| input.id().to_string())
        .collect()
}

pub fn find_input<'a>(nodes: &'a [Node], id: &str) -> Option<&'a dyn Input> {
    nodes
        .iter()
        .filter_map(|node| node.as_input())
        .find(|input| input.id() == id)
}

pub fn find_input_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut dyn Input> {
    nodes
        .iter_mut()
        .filter_map(|node| node.as_input_mut())
        .find(|input| input.id() == id)
}
