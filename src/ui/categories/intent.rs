use crate::model::Category;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CategoryIntent {
    LoadStarted,
    Loaded(Vec<Category>),
    LoadFailed(String),
    EditName(String),
    /// Validate the form; a valid name moves the form into `submitting`.
    SubmitCreate,
    CreateSucceeded(Option<String>),
    CreateFailed(String),
    DismissMessages,
}

impl Intent for CategoryIntent {}
