use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Every constraint a payload failed, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

pub fn check_required_text(
    errors: &mut ValidationError,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    if value.trim().is_empty() {
        errors.push(field, format!("{label} is required"));
        return;
    }

    let len = value.chars().count();
    if len < min || len > max {
        errors.push(
            field,
            format!("{label} must be between {min} and {max} characters"),
        );
    }
}

pub fn check_max_text(
    errors: &mut ValidationError,
    field: &'static str,
    label: &str,
    value: Option<&str>,
    max: usize,
) {
    if let Some(value) = value {
        if value.chars().count() > max {
            errors.push(field, format!("{label} cannot exceed {max} characters"));
        }
    }
}

pub fn check_present<T>(
    errors: &mut ValidationError,
    field: &'static str,
    label: &str,
    value: Option<&T>,
) {
    if value.is_none() {
        errors.push(field, format!("{label} is required"));
    }
}
