//! Validator seam + shared field rules.
//!
//! Validators inspect a request and aggregate failures per field; they never
//! mutate the request. Multiple rules (and multiple validators) targeting
//! the same field append all of their messages, not just the first.

use std::collections::BTreeMap;

/// Field name → error messages, ordered for deterministic output.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Per-request-type validation rule set.
pub trait Validator<R>: Send + Sync {
    fn validate(&self, request: &R, errors: &mut FieldErrors);
}

/// Shared rule helpers used by the per-operation validators.
pub mod rules {
    use super::FieldErrors;

    pub fn fail(errors: &mut FieldErrors, field: &str, message: impl Into<String>) {
        errors.entry(field.to_string()).or_default().push(message.into());
    }

    /// Value must be non-empty after trimming.
    pub fn required(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            fail(errors, field, message);
        }
    }

    pub fn max_length(errors: &mut FieldErrors, field: &str, value: &str, max: usize, message: &str) {
        if value.chars().count() > max {
            fail(errors, field, message);
        }
    }

    /// Structural email check: one `@` with non-empty local part and a
    /// dotted domain. Skips empty values (pair with `required`).
    pub fn email(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let ok = match value.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            None => false,
        };
        if !ok {
            fail(errors, field, message);
        }
    }

    /// Phone check: optional leading `+`, then digits, spaces, and dashes.
    /// Skips empty values (pair with `required`).
    pub fn phone(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let rest = value.strip_prefix('+').unwrap_or(value);
        let ok = !rest.is_empty()
            && rest.chars().any(|c| c.is_ascii_digit())
            && rest.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-' || c == '(' || c == ')');
        if !ok {
            fail(errors, field, message);
        }
    }

    pub fn non_negative(errors: &mut FieldErrors, field: &str, value: i64, message: &str) {
        if value < 0 {
            fail(errors, field, message);
        }
    }
}
