use alloc::string::{String, ToString as _};
use core::fmt;

/// A type whose values are a fixed set of labeled integers, convertible to and from text.
///
/// Implementors are expected to be thin wrappers around an integer, so that
/// [`set_int64()`](Enum::set_int64) can store any value, including ones that have no label.
/// Such values are reported by [`is_valid()`](Enum::is_valid) and are still formattable.
pub trait Enum: Copy + Eq + fmt::Display + 'static {
    /// Name of the type, as used in error messages.
    const TYPE_NAME: &'static str;

    /// Sets the value from its label.
    ///
    /// On failure, `self` is left unchanged.
    fn set_string(&mut self, s: &str) -> Result<(), InvalidEnumError>;

    /// Returns the backing integer.
    fn int64(self) -> i64;

    /// Sets the backing integer. The value is not checked against [`values()`](Enum::values).
    fn set_int64(&mut self, n: i64);

    /// All valid values, in ascending order of their backing integers.
    fn values() -> &'static [Self];

    /// Returns a description of the value.
    ///
    /// Unless overridden, this is the same as the [`Display`](fmt::Display) output.
    #[inline]
    fn desc(self) -> String {
        self.to_string()
    }

    /// Returns whether this value is one of [`values()`](Enum::values).
    #[inline]
    fn is_valid(self) -> bool {
        Self::values().contains(&self)
    }

    /// Encodes the value as text. This never fails, even for invalid values.
    #[inline]
    fn marshal_text(self) -> String {
        self.to_string()
    }

    /// Decodes text produced by [`marshal_text()`](Enum::marshal_text),
    /// with the same rules as [`set_string()`](Enum::set_string).
    ///
    /// Text that is not UTF-8 is rejected.
    #[inline]
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), InvalidEnumError> {
        match core::str::from_utf8(text) {
            Ok(s) => self.set_string(s),
            Err(_) => Err(InvalidEnumError::new(
                String::from_utf8_lossy(text).into_owned(),
                Self::TYPE_NAME,
            )),
        }
    }
}

/// Error when text is not the label of any value of an [`Enum`] type.
#[derive(Clone, Debug, displaydoc::Display, Eq, PartialEq)]
#[displaydoc("{value} is not a valid value for type {type_name}")]
pub struct InvalidEnumError {
    value: String,
    type_name: &'static str,
}

impl InvalidEnumError {
    /// Constructs an error reporting that `value` is not a label of the type named `type_name`.
    #[inline]
    pub fn new(value: impl Into<String>, type_name: &'static str) -> Self {
        Self {
            value: value.into(),
            type_name,
        }
    }

    /// The text that was rejected.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The name of the type that the text was being parsed as.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl core::error::Error for InvalidEnumError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use pretty_assertions::assert_eq;

    /// A minimal implementor, to test the provided methods independently of any real type.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    struct Switch(i64);

    impl fmt::Display for Switch {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self.0 {
                0 => f.write_str("Off"),
                1 => f.write_str("On"),
                n => write!(f, "{n}"),
            }
        }
    }

    impl Enum for Switch {
        const TYPE_NAME: &'static str = "Switch";

        fn set_string(&mut self, s: &str) -> Result<(), InvalidEnumError> {
            match s {
                "Off" => self.0 = 0,
                "On" => self.0 = 1,
                _ => return Err(InvalidEnumError::new(s, Self::TYPE_NAME)),
            }
            Ok(())
        }
        fn int64(self) -> i64 {
            self.0
        }
        fn set_int64(&mut self, n: i64) {
            self.0 = n;
        }
        fn values() -> &'static [Self] {
            static VALUES: [Switch; 2] = [Switch(0), Switch(1)];
            &VALUES
        }
    }

    #[test]
    fn provided_methods() {
        let mut s = Switch(1);
        assert_eq!(s.desc(), "On");
        assert_eq!(s.marshal_text(), "On");
        assert!(s.is_valid());

        s.unmarshal_text(b"Off").unwrap();
        assert_eq!(s, Switch(0));

        s.set_int64(7);
        assert!(!s.is_valid());
        assert_eq!(s.marshal_text(), "7");
    }

    #[test]
    fn unmarshal_rejects_non_utf8() {
        let mut s = Switch(1);
        let error = s.unmarshal_text(b"O\xFFn").unwrap_err();
        assert_eq!(error.value(), "O\u{FFFD}n");
        assert_eq!(error.type_name(), "Switch");
        assert_eq!(s, Switch(1));
    }

    #[test]
    fn error_message() {
        let error = InvalidEnumError::new("Dim", "Switch");
        assert_eq!(error.to_string(), "Dim is not a valid value for type Switch");
    }
}
