use serde::{Deserialize, Serialize};

/// Aggregate result of one import: validated rows plus one message per rejected row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub success_count: usize,
    pub errors: Vec<String>,
}

impl ImportOutcome {
    pub fn rejected_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_snake_case_keys() {
        let outcome = ImportOutcome {
            success_count: 2,
            errors: vec!["Row 4: role is invalid".into()],
        };
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"{"success_count":2,"errors":["Row 4: role is invalid"]}"#
        );
    }
}
