//! Errors and error specific types for universal use

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Parsing and encoding errors.
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    /// Failed to deserialize bytes or a string into the named type.
    #[error("Failed to parse struct: {0}")]
    StructParseFailure(&'static str),
    /// Failed to serialize a value into the named format.
    #[error("Failed to serialize to {0} format")]
    EncodeError(&'static str),
    /// The provided string is not a well-formed email address.
    #[error("Failed to parse email")]
    EmailParsingError,
}

/// Validation errors.
#[allow(missing_docs)] // Only to prevent warnings about struct fields not being documented
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The provided input is missing a required field.
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: String },

    /// An incorrect value was provided for the field specified by `field_name`.
    #[error("Incorrect value provided for field: {field_name}")]
    IncorrectValueProvided { field_name: &'static str },

    /// An invalid input was provided.
    #[error("{message}")]
    InvalidValue { message: String },
}
