use std::collections::BTreeSet;
use std::env;
use thiserror::Error;

use crate::api::Arguments;
use crate::classifier::{trim_leading_dashes, Classifier};
use crate::model::Mode;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A misconfigured command line parser.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// The command line parser configuration.
///
/// Configure the interpretation [`Mode`] and the names to treat as parameters, then `build`.
/// Registering names is optional; without them the `Mode` decides how unregistered options are read.
///
/// ### Example
/// ```
/// # use argsift_core as argsift;
/// use argsift::{CommandLineParser, Mode};
///
/// let parser = CommandLineParser::new()
///     .mode(Mode::SINGLE_DASH_IS_MULTIFLAG)
///     .params(["-o", "--output"])
///     .build();
///
/// let arguments = parser.parse_tokens(&["-vo", "out.txt", "in.txt"]);
/// assert!(arguments.flag("v"));
/// assert_eq!(arguments.param("o"), Some("out.txt"));
/// assert_eq!(arguments.positional(0), Some("in.txt"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandLineParser {
    mode: Mode,
    registered: BTreeSet<String>,
}

impl CommandLineParser {
    /// Create a command line parser configuration, with the default [`Mode`] and no registered names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interpretation mode.
    /// If repeated, only the final mode will apply.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Register a parameter name (leading dashes are ignored).
    /// A registered option always takes the next token as its value, when one is available.
    ///
    /// Registration accumulates across calls.
    pub fn param(mut self, name: impl AsRef<str>) -> Self {
        self.registered
            .insert(trim_leading_dashes(name.as_ref()).to_string());
        self
    }

    /// Register many parameter names.
    /// See [`CommandLineParser::param`].
    pub fn params<S: AsRef<str>>(self, names: impl IntoIterator<Item = S>) -> Self {
        names.into_iter().fold(self, |clp, name| clp.param(name))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: conflicting modes).
    pub fn build_parser(self) -> Result<GeneralParser, ConfigError> {
        if self.mode.is_conflicted() {
            return Err(ConfigError(format!(
                "Cannot combine the modes '{}' and '{}' (given '{}').",
                Mode::PREFER_FLAG_FOR_UNREG_OPTION,
                Mode::PREFER_PARAM_FOR_UNREG_OPTION,
                self.mode,
            )));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Built parser with mode '{}' and registered parameters {:?}.",
                self.mode, self.registered
            );
        }

        Ok(GeneralParser {
            classifier: Classifier::new(self.mode, self.registered),
        })
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: conflicting modes).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

/// The configured command line parser.
/// Built via [`CommandLineParser::build`].
#[derive(Debug, Clone)]
pub struct GeneralParser {
    classifier: Classifier,
}

impl GeneralParser {
    /// Classify the input tokens.
    ///
    /// Every token is treated as argument data, so leave out the program name unless you want it as positional `0`.
    /// Each call produces an independent [`Arguments`].
    ///
    /// ### Example
    /// ```
    /// # use argsift_core as argsift;
    /// use argsift::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new().build();
    /// let tokens: &[&str] = &[];
    /// let arguments = parser.parse_tokens(tokens);
    /// assert!(arguments.is_empty());
    /// ```
    pub fn parse_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Arguments {
        Arguments::new(
            self.classifier.classify(tokens),
            self.classifier.registered().clone(),
        )
    }

    /// Classify the Cli [`env::args_os`], skipping the program name.
    /// Tokens which are not valid unicode are converted lossily.
    pub fn parse(&self) -> Arguments {
        let command_input: Vec<String> = env::args_os()
            .skip(1)
            .map(|token| token.to_string_lossy().into_owned())
            .collect();
        self.parse_tokens(command_input.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[rstest]
    #[case(Mode::EMPTY)]
    #[case(Mode::default())]
    #[case(Mode::PREFER_PARAM_FOR_UNREG_OPTION)]
    #[case(
        Mode::PREFER_PARAM_FOR_UNREG_OPTION
            | Mode::NO_SPLIT_ON_EQUALSIGN
            | Mode::SINGLE_DASH_IS_MULTIFLAG
    )]
    fn build_mode(#[case] mode: Mode) {
        let parser = CommandLineParser::new().mode(mode).build_parser();
        assert_matches!(parser, Ok(_));
    }

    #[rstest]
    #[case(Mode::PREFER_FLAG_FOR_UNREG_OPTION | Mode::PREFER_PARAM_FOR_UNREG_OPTION)]
    #[case(
        Mode::PREFER_FLAG_FOR_UNREG_OPTION
            | Mode::PREFER_PARAM_FOR_UNREG_OPTION
            | Mode::SINGLE_DASH_IS_MULTIFLAG
    )]
    fn build_conflicted_mode(#[case] mode: Mode) {
        let result = CommandLineParser::new().mode(mode).build_parser();

        assert_matches!(result, Err(ConfigError(message)) => {
            assert_contains!(message, "Cannot combine the modes 'PREFER_FLAG_FOR_UNREG_OPTION' and 'PREFER_PARAM_FOR_UNREG_OPTION'");
        });
    }

    #[test]
    fn mode_replaces() {
        let parser = CommandLineParser::new()
            .mode(Mode::PREFER_PARAM_FOR_UNREG_OPTION)
            .mode(Mode::PREFER_FLAG_FOR_UNREG_OPTION)
            .build_parser()
            .unwrap();

        let arguments = parser.parse_tokens(&["--x", "v"]);
        assert!(arguments.flag("x"));
        assert_eq!(arguments.positional(0), Some("v"));
    }

    #[test]
    fn registration_accumulates() {
        let parser = CommandLineParser::new()
            .param("a")
            .params(["--b", "-c"])
            .params(vec!["d".to_string()])
            .build_parser()
            .unwrap();

        let arguments = parser.parse_tokens(&["--a", "1", "-b", "2", "c", "--c", "3", "-d", "4"]);
        assert_eq!(arguments.param("a"), Some("1"));
        assert_eq!(arguments.param("b"), Some("2"));
        assert_eq!(arguments.param("c"), Some("3"));
        assert_eq!(arguments.param("d"), Some("4"));
        assert_eq!(arguments.positionals(), &["c".to_string()]);

        for name in ["a", "b", "c", "d"] {
            assert!(arguments.registered(name));
        }
        assert!(!arguments.registered("e"));
    }

    #[test]
    fn parse_tokens_fresh() {
        let parser = CommandLineParser::new().build_parser().unwrap();

        let first = parser.parse_tokens(&["a", "--f"]);
        let second = parser.parse_tokens(&["b"]);

        assert_eq!(first.positionals(), &["a".to_string()]);
        assert!(first.flag("f"));
        assert_eq!(second.positionals(), &["b".to_string()]);
        assert!(!second.flag("f"));
    }

    #[test]
    fn parse_tokens_empty() {
        let parser = CommandLineParser::new().build_parser().unwrap();
        let tokens: &[&str] = &[];

        let arguments = parser.parse_tokens(tokens);

        assert!(arguments.is_empty());
        assert_eq!(arguments.flags().count(), 0);
        assert_eq!(arguments.params().count(), 0);
    }
}
