//! Field validation rules

use std::fmt;

use serde::Serialize;

use crate::types::AccountFields;

/// Number of digits in a student ID.
pub const STUDENT_ID_LEN: usize = 7;

/// Minimum password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Form field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    StudentId,
    Password,
}

impl FormField {
    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::StudentId => "Student ID",
            Self::Password => "Password",
        }
    }
}

/// A password requirement that was not met
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordRequirement {
    Letter,
    Digit,
    Special,
    MinLength,
}

impl PasswordRequirement {
    fn describe(self) -> &'static str {
        match self {
            Self::Letter => "at least one letter",
            Self::Digit => "at least one digit",
            Self::Special => "at least one special character",
            Self::MinLength => "at least 8 characters",
        }
    }
}

/// Validation failure for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldValidationError {
    /// Field left empty
    Required { field: FormField },
    /// Student ID is not exactly seven digits
    InvalidStudentId { field: FormField },
    /// Password misses one or more requirements
    WeakPassword {
        field: FormField,
        missing: Vec<PasswordRequirement>,
    },
}

impl FieldValidationError {
    #[must_use]
    pub fn field(&self) -> FormField {
        match self {
            Self::Required { field }
            | Self::InvalidStudentId { field }
            | Self::WeakPassword { field, .. } => *field,
        }
    }
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "Please enter {}", field.label()),
            Self::InvalidStudentId { field } => {
                write!(f, "{} must be exactly {STUDENT_ID_LEN} digits", field.label())
            }
            Self::WeakPassword { field, missing } => {
                let reasons: Vec<&str> = missing.iter().map(|r| r.describe()).collect();
                write!(f, "{} needs {}", field.label(), reasons.join(", "))
            }
        }
    }
}

impl std::error::Error for FieldValidationError {}

/// All field errors from one validation pass, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldValidationError>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Error for one field, if any
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&FieldValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.0.iter()
    }

    pub(crate) fn clear(&mut self, field: FormField) {
        self.0.retain(|e| e.field() != field);
    }
}

impl From<Vec<FieldValidationError>> for FieldErrors {
    fn from(errors: Vec<FieldValidationError>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Name: required
pub fn validate_name(name: &str) -> Result<(), FieldValidationError> {
    if name.is_empty() {
        return Err(FieldValidationError::Required {
            field: FormField::Name,
        });
    }
    Ok(())
}

/// Student ID: required, exactly seven ASCII digits
pub fn validate_student_id(student_id: &str) -> Result<(), FieldValidationError> {
    let field = FormField::StudentId;
    if student_id.is_empty() {
        return Err(FieldValidationError::Required { field });
    }
    if student_id.len() != STUDENT_ID_LEN || !student_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldValidationError::InvalidStudentId { field });
    }
    Ok(())
}

/// Password: required, letter + digit + special character, minimum length.
///
/// "Special" is anything that is neither an ASCII letter nor an ASCII digit.
pub fn validate_password(password: &str) -> Result<(), FieldValidationError> {
    let field = FormField::Password;
    if password.is_empty() {
        return Err(FieldValidationError::Required { field });
    }

    let mut missing = Vec::new();
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        missing.push(PasswordRequirement::Letter);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        missing.push(PasswordRequirement::Digit);
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        missing.push(PasswordRequirement::Special);
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        missing.push(PasswordRequirement::MinLength);
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FieldValidationError::WeakPassword { field, missing })
    }
}

/// Run every rule, collecting one error per failing field
pub fn validate_fields(fields: &AccountFields) -> Result<(), FieldErrors> {
    let errors: Vec<FieldValidationError> = [
        validate_name(&fields.name),
        validate_student_id(&fields.student_id),
        validate_password(fields.password.expose()),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors(errors))
    }
}
