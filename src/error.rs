//! When constructing or mutating big integers goes wrong.

use alloc::collections::TryReserveError;
use core::fmt::{self, Debug, Display};
use core::result;

/// This type represents all possible errors that can occur when constructing
/// or mutating a big integer.
pub struct Error {
    code: ErrorCode,
}

/// Alias for a `Result` with the error type `bigword::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Categorizes the cause of this error.
    ///
    /// - `Category::Allocation` - the allocator could not satisfy a
    ///   construction or growth request
    /// - `Category::Precondition` - an operand was outside the range an
    ///   operation accepts
    /// - `Category::Parse` - input that is not a valid decimal integer
    pub fn classify(&self) -> Category {
        match self.code {
            ErrorCode::AllocationFailure => Category::Allocation,
            ErrorCode::AddendOutOfRange
            | ErrorCode::MultiplicandOutOfRange
            | ErrorCode::LengthOutOfRange => Category::Precondition,
            ErrorCode::EmptyInput | ErrorCode::InvalidDigit(_) => Category::Parse,
        }
    }

    /// Returns true if this error was caused by the allocator refusing a
    /// construction or growth request.
    pub fn is_allocation(&self) -> bool {
        self.classify() == Category::Allocation
    }

    /// Returns true if this error was caused by an operand outside the range
    /// the operation accepts.
    pub fn is_precondition(&self) -> bool {
        self.classify() == Category::Precondition
    }

    /// Returns true if this error was caused by input that is not a valid
    /// decimal integer.
    pub fn is_parse(&self) -> bool {
        self.classify() == Category::Parse
    }

    #[cold]
    pub(crate) fn precondition(code: ErrorCode) -> Self {
        Error { code }
    }

    #[cold]
    pub(crate) fn parse(code: ErrorCode) -> Self {
        Error { code }
    }
}

/// Categorizes the cause of a `bigword::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by the allocator refusing a construction or
    /// growth request. The value the operation ran against is left exactly
    /// as it was before the call.
    Allocation,

    /// The error was caused by an operand outside the range the operation
    /// accepts, for example an addend that does not fit in a single word.
    /// The value is untouched.
    Precondition,

    /// The error was caused by input that is not a valid decimal integer.
    Parse,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum ErrorCode {
    /// The underlying allocator could not satisfy the request.
    AllocationFailure,

    /// Addend does not fit in a single word.
    AddendOutOfRange,

    /// Multiplicand magnitude does not fit in a single word.
    MultiplicandOutOfRange,

    /// A value must hold at least one word.
    LengthOutOfRange,

    /// Tried to parse an integer out of an empty string.
    EmptyInput,

    /// Unexpected byte while parsing a decimal string.
    InvalidDigit(u8),
}

impl From<TryReserveError> for Error {
    #[cold]
    fn from(_: TryReserveError) -> Self {
        Error {
            code: ErrorCode::AllocationFailure,
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::AllocationFailure => f.write_str("memory allocation failed"),
            ErrorCode::AddendOutOfRange => f.write_str("addend does not fit in a single word"),
            ErrorCode::MultiplicandOutOfRange => {
                f.write_str("multiplicand magnitude does not fit in a single word")
            }
            ErrorCode::LengthOutOfRange => f.write_str("length must be at least one word"),
            ErrorCode::EmptyInput => f.write_str("cannot parse integer from empty string"),
            ErrorCode::InvalidDigit(byte) => {
                write!(f, "invalid digit `{}` in decimal string", char::from(*byte))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.code, f)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error({:?})", self.code)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
