//! Form Controller: validation rules and the add/edit form model

mod model;
mod rules;

pub use model::{AccountForm, FormPhase, ValidatedAccount};
pub use rules::{
    validate_fields, validate_name, validate_password, validate_student_id, FieldErrors,
    FieldValidationError, FormField, PasswordRequirement, PASSWORD_MIN_LEN, STUDENT_ID_LEN,
};
