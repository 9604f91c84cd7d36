//! Input validation error

use thiserror::Error;

/// A numeric answer could not be parsed
///
/// Carries no field detail; callers show one generic message and let the
/// respondent correct their answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please enter valid numbers for all fields.")]
pub struct InvalidInputError;
