//! The program itself: print the number, compute, construct, display.
use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, trace};

use crate::types::{MyClass, MyEnum, MyStruct};
use crate::values::{self, Derived, OperationError, ARRAY, NUMBER, SINGLE_QUOTE};


/// An error that happened while running the program.
#[derive(Debug, Error)]
pub enum RunError {
    /// Computing one of the derived values failed.
    #[error("Computing {step} failed: {error}")]
    ComputationFailed {
        /// Name of the step that failed.
        step: &'static str,
        error: OperationError,
    },
    /// The output stream refused a write.
    #[error("Writing output failed: {0}")]
    OutputFailed(#[from] io::Error),
}

/// Everything the program computed and constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    pub derived: Derived,
    pub choice: MyEnum,
    pub record: MyStruct,
    /// Number of lines written to the output.
    pub lines_written: usize,
}

/// Run the program with the built-in constants.
///
/// With a working output stream this always succeeds and writes exactly
/// two lines:
/// ```text
/// The number is: 10
/// Inside myClass
/// ```
pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<RunResult, RunError> {
    let mut lines_written = 0;

    writeln!(out, "The number is: {}", NUMBER)?;
    lines_written += 1;
    trace!(line = lines_written, "number written");

    let derived = values::derive(NUMBER, ARRAY)
        .map_err(|error| RunError::ComputationFailed { step: "derived values", error })?;
    debug!(
        value = derived.value,
        comparison = derived.comparison,
        bitwise = derived.bitwise,
        modulo = derived.modulo,
        "derived values computed"
    );

    let choice = MyEnum::First;
    let record = MyStruct { id: 1, name: 'a' };
    let class = MyClass::default();
    debug!(%choice, ?record, quote = %SINGLE_QUOTE, "instances constructed");

    class.display(out)?;
    lines_written += 1;
    trace!(line = lines_written, "message written");

    Ok(RunResult { derived, choice, record, lines_written })
}
