use crate::core::record::FieldId;

#[derive(Debug, Clone)]
pub enum FormEvent {
    InputChanged {
        id: FieldId,
        value: String,
    },
    FocusChanged {
        from: Option<FieldId>,
        to: Option<FieldId>,
    },
    SubmitRequested,
    ErrorCancelled {
        id: FieldId,
    },
}
