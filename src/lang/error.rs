#[derive(PartialEq, Clone)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $($arg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message(format!($($arg)+))
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(self, message: String) -> Error {
        debug_assert!(self.message.is_empty());
        Error { message, ..self }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorCode {
    StackUnderflow,
    DivisionByZero,
    DomainError,
    UnknownToken,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            StackUnderflow => "stack underflow",
            DivisionByZero => "division by zero",
            DomainError => "domain error",
            UnknownToken => "unknown token",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.code)
        } else if self.code == ErrorCode::UnknownToken {
            write!(f, "{} '{}'", self.code, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    #[test]
    fn test_display() {
        assert_eq!(error!(DivisionByZero).to_string(), "division by zero");
        assert_eq!(
            error!(DivisionByZero; "cannot invert zero").to_string(),
            "cannot invert zero"
        );
        assert_eq!(
            error!(UnknownToken; "{}", "foo").to_string(),
            "unknown token 'foo'"
        );
        assert_eq!(
            error!(StackUnderflow; "need at least two values for '{}'", "+").to_string(),
            "need at least two values for '+'"
        );
    }
}
