use crate::model::{Category, RecordId};
use crate::ui::mvi::UiState;

pub const UNKNOWN_CATEGORY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryState {
    pub categories: Vec<Category>,
    pub loading: bool,
    /// Text of the "new category" field.
    pub new_name: String,
    /// Set while a create request is outstanding.
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl UiState for CategoryState {}

impl CategoryState {
    /// Display name for a product's category code.
    pub fn name_for(&self, code: &RecordId) -> &str {
        self.categories
            .iter()
            .find(|category| category.is_referenced_by(code))
            .map(|category| category.name.as_str())
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Name to send, once the form has been accepted.
    pub fn pending_name(&self) -> Option<&str> {
        self.submitting.then(|| self.new_name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, code: &str, name: &str) -> Category {
        Category {
            id: RecordId::Int(id),
            code: Some(RecordId::from(code)),
            name: name.to_string(),
        }
    }

    #[test]
    fn resolves_names_by_code() {
        let state = CategoryState {
            categories: vec![category(1, "DM01", "Rings"), category(2, "DM02", "Chains")],
            ..Default::default()
        };
        assert_eq!(state.name_for(&RecordId::from("DM02")), "Chains");
        assert_eq!(state.name_for(&RecordId::from("DM09")), UNKNOWN_CATEGORY);
    }

    #[test]
    fn pending_name_only_while_submitting() {
        let mut state = CategoryState {
            new_name: "  Anklets ".to_string(),
            ..Default::default()
        };
        assert_eq!(state.pending_name(), None);
        state.submitting = true;
        assert_eq!(state.pending_name(), Some("Anklets"));
    }
}
