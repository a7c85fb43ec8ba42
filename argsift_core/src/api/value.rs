use std::borrow::Cow;
use std::str::FromStr;
use thiserror::Error;

/// Where a [`Value`] was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The positional argument at this index.
    Positional(usize),
    /// The parameter under these names (alternatives in priority order).
    Parameter(Vec<String>),
}

impl Source {
    pub(crate) fn parameter(names: &[&str]) -> Self {
        Source::Parameter(names.iter().map(|name| name.to_string()).collect())
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Positional(index) => write!(f, "positional argument #{index}"),
            Source::Parameter(names) => {
                let quoted: Vec<String> = names.iter().map(|name| format!("'{name}'")).collect();
                write!(f, "parameter {}", quoted.join(" | "))
            }
        }
    }
}

/// Failure to produce a typed value from the classified arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// Nothing was found, and no default applied.
    #[error("no value for {0}.")]
    Missing(Source),

    /// The text was found, but did not parse via [`FromStr`].
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion {
        /// The text which failed to convert.
        token: String,
        /// The target type.
        type_name: &'static str,
    },
}

/// The text of a positional argument or parameter, which may be absent.
///
/// Converting an absent value, or text that `T` cannot parse, produces a [`ConversionError`].
/// Defaults are rendered to text when the value is looked up, so they convert exactly as command line text would.
///
/// ### Example
/// ```
/// # use argsift_core as argsift;
/// use argsift::CommandLineParser;
///
/// let parser = CommandLineParser::new().param("level").build();
/// let arguments = parser.parse_tokens(&["--level", "3"]);
///
/// let level = arguments.value("level");
/// assert!(level.is_valid());
/// assert_eq!(level.as_str(), Some("3"));
/// assert_eq!(level.parse::<u8>(), Ok(3));
///
/// let missing = arguments.value("depth");
/// assert!(!missing.is_valid());
/// assert!(missing.parse::<u8>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<'a> {
    text: Option<Cow<'a, str>>,
    source: Source,
}

impl<'a> Value<'a> {
    pub(crate) fn found(text: &'a str, source: Source) -> Self {
        Self {
            text: Some(Cow::Borrowed(text)),
            source,
        }
    }

    pub(crate) fn absent(source: Source) -> Self {
        Self { text: None, source }
    }

    pub(crate) fn or_default(self, default: impl std::fmt::Display) -> Self {
        match self.text {
            Some(_) => self,
            None => Self {
                text: Some(Cow::Owned(default.to_string())),
                source: self.source,
            },
        }
    }

    /// Whether there is text to convert.
    pub fn is_valid(&self) -> bool {
        self.text.is_some()
    }

    /// The raw text, if present.
    pub fn as_str(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Where this value was looked up.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Convert the text into `T` via [`FromStr`].
    pub fn parse<T: FromStr>(&self) -> Result<T, ConversionError> {
        let token = self
            .text
            .as_deref()
            .ok_or_else(|| ConversionError::Missing(self.source.clone()))?;
        T::from_str(token).map_err(|_| ConversionError::InvalidConversion {
            token: token.to_string(),
            type_name: std::any::type_name::<T>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn found() {
        let value = Value::found("12", Source::Positional(0));
        assert!(value.is_valid());
        assert_eq!(value.as_str(), Some("12"));
        assert_eq!(value.parse::<u32>(), Ok(12));
        assert_eq!(value.parse::<String>(), Ok("12".to_string()));
    }

    #[test]
    fn absent() {
        let value = Value::absent(Source::parameter(&["a", "b"]));
        assert!(!value.is_valid());
        assert_eq!(value.as_str(), None);
        assert_matches!(value.parse::<u32>(), Err(ConversionError::Missing(Source::Parameter(names))) => {
            assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
        });
    }

    #[test]
    fn invalid_conversion() {
        let value = Value::found("blah", Source::Positional(1));
        assert_eq!(
            value.parse::<u32>().unwrap_err().to_string(),
            "cannot convert 'blah' to u32."
        );
    }

    #[test]
    fn default_only_when_absent() {
        let value = Value::found("1", Source::Positional(0)).or_default(42);
        assert_eq!(value.parse::<u32>(), Ok(1));

        let value = Value::absent(Source::Positional(0)).or_default(42);
        assert_eq!(value.as_str(), Some("42"));
        assert_eq!(value.parse::<u32>(), Ok(42));
        assert_eq!(value.source(), &Source::Positional(0));
    }

    #[test]
    fn default_converts_like_text() {
        // A default which does not convert fails the same way command line text does.
        let value = Value::absent(Source::Positional(0)).or_default(-1);
        assert_matches!(
            value.parse::<u32>(),
            Err(ConversionError::InvalidConversion { token, type_name: "u32" }) => {
                assert_eq!(token, "-1");
            }
        );
    }

    #[rstest]
    #[case(Source::Positional(3), "no value for positional argument #3.")]
    #[case(Source::parameter(&["o"]), "no value for parameter 'o'.")]
    #[case(Source::parameter(&["o", "output"]), "no value for parameter 'o' | 'output'.")]
    fn missing_message(#[case] source: Source, #[case] expected: &str) {
        assert_eq!(ConversionError::Missing(source).to_string(), expected);
    }
}
