//! This module provides a trait [`Input`] for representing inputs generated for property based
//! testing

use proptest::{prop_assert_eq, test_runner::TestCaseResult};

/// Represents an input generated for testing purposes.
///
/// An input knows how to render itself as source text and how to verify the output the scanner
/// produced for that text.
pub trait Input<Output> {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}

impl<T, U> Input<&Vec<T>> for &Vec<U>
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &Vec<T>) -> TestCaseResult {
        prop_assert_eq!(self.len(), output.len());

        for (input, output) in self.iter().zip(output.iter()) {
            input.assert(output)?;
        }

        Ok(())
    }
}

