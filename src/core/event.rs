use crate::submit::SubmitError;
use crate::terminal::KeyEvent;

#[derive(Debug, Clone)]
pub enum Action {
    Exit,
    Cancel,
    Submit,
    Back,
    NextInput,
    PrevInput,
    DeleteWord,
    DeleteWordForward,
    InputKey(KeyEvent),
    ClearErrorMessage(String),
    SubmitFinished(Result<(), SubmitError>),
}
