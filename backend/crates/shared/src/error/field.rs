//! Field-level validation errors

use serde::Serialize;
use std::borrow::Cow;

/// One rejected input field, serialized as `{ "field": ..., "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Cow<'static, str>,
    pub message: Cow<'static, str>,
}

impl FieldError {
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulates field errors so every problem in a request is reported at once.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(value)` when nothing was recorded, otherwise the collected errors.
    pub fn finish<T>(self, value: T) -> Result<T, Vec<FieldError>> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self.0)
        }
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_empty() {
        let errors = FieldErrors::new();
        assert_eq!(errors.finish(7), Ok(7));
    }

    #[test]
    fn test_finish_collects_in_order() {
        let mut errors = FieldErrors::new();
        errors.push("title", "Question title is required");
        errors.push("platform", "Invalid platform");

        let collected = errors.finish(()).unwrap_err();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].field, "title");
        assert_eq!(collected[1].message, "Invalid platform");
    }
}
