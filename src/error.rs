//! When parsing, formatting or converting a `Bigint` goes wrong.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;

/// This type represents all possible errors that can occur when parsing,
/// formatting or converting a `Bigint`.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    /// A larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `bigint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based column of the offending character in the parsed text.
    ///
    /// Errors that are not tied to a position in some input, such as an
    /// out-of-range base or a division by zero, report column 0.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - text that does not follow the integer grammar
    /// - `Category::Argument` - a base outside `2..=36`
    /// - `Category::Arithmetic` - a zero divisor or a value that does not
    ///   fit the requested type
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::InvalidFormat => Category::Syntax,
            ErrorCode::InvalidBase(_) => Category::Argument,
            ErrorCode::DivisionByZero | ErrorCode::NumberOutOfRange => Category::Arithmetic,
        }
    }

    /// Returns true if this error was caused by text that is not a
    /// well-formed integer literal.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by an unsupported base.
    pub fn is_argument(&self) -> bool {
        self.classify() == Category::Argument
    }

    /// Returns true if this error was caused by an arithmetic condition.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }
}

/// Categorizes the cause of a `bigint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by text that does not follow the integer grammar.
    Syntax,

    /// The error was caused by a base outside `2..=36`.
    Argument,

    /// The error was caused by a zero divisor or by a value that does not fit
    /// in the requested primitive type.
    Arithmetic,
}

struct ErrorImpl {
    code: ErrorCode,
    column: usize,
}

/// This type describes all possible errors that can occur when parsing,
/// formatting or converting a `Bigint`.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// A character that is not a digit of the selected base, an empty digit
    /// run, or an unknown format specifier.
    InvalidFormat,

    /// A base outside `2..=36`.
    InvalidBase(u32),

    /// Division or remainder with a zero divisor.
    DivisionByZero,

    /// Number does not fit in the requested primitive type.
    NumberOutOfRange,
}

impl Error {
    #[cold]
    fn new(code: ErrorCode, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, column }),
        }
    }

    #[cold]
    pub(crate) fn syntax(column: usize) -> Self {
        Error::new(ErrorCode::InvalidFormat, column)
    }

    #[cold]
    pub(crate) fn invalid_base(base: u32) -> Self {
        Error::new(ErrorCode::InvalidBase(base), 0)
    }

    #[cold]
    pub(crate) fn division_by_zero() -> Self {
        Error::new(ErrorCode::DivisionByZero, 0)
    }

    #[cold]
    pub(crate) fn out_of_range() -> Self {
        Error::new(ErrorCode::NumberOutOfRange, 0)
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::InvalidFormat => f.write_str("InvalidFormat"),
            ErrorCode::InvalidBase(base) => f.debug_tuple("InvalidBase").field(base).finish(),
            ErrorCode::DivisionByZero => f.write_str("DivisionByZero"),
            ErrorCode::NumberOutOfRange => f.write_str("NumberOutOfRange"),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::InvalidFormat => f.write_str("invalid integer format"),
            ErrorCode::InvalidBase(base) => {
                write!(f, "invalid base {}, expected a base from 2 to 36", base)
            }
            ErrorCode::DivisionByZero => f.write_str("attempt to divide by zero"),
            ErrorCode::NumberOutOfRange => f.write_str("number out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.column == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at column {}", self.code, self.column)
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, column: {})",
            self.err.code.to_string(),
            self.err.column
        )
    }
}
