//! Result type alias for envslots

use super::errors::EnvslotsError;

/// Result type alias for envslots operations
///
/// # Examples
///
/// ```
/// use envslots::domain::result::Result;
/// use envslots::domain::errors::EnvslotsError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(EnvslotsError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, EnvslotsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(EnvslotsError::Validation("test error".to_string()));
        assert!(result.is_err());
    }
}
