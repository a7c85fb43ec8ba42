//! `argsift` is a command line argument classifier for Rust.
//!
//! Most command line parsers ask for a schema before they will read a single token.
//! `argsift` does not: it reads the raw tokens, sorts each into a *positional*, a *flag*, or a *parameter*, and lets you query the result.
//! A schema is optional; registering parameter names only sharpens the heuristics for ambiguous tokens.
//! Specifically, `argsift` prioritizes the following design concerns:
//! * *Schema-optional parsing*:
//! A program should be able to ask "was `--verbose` given?" without declaring `--verbose` first.
//! * *Predictable heuristics*:
//! Every ambiguous case (a negative number, an option at the end of the line, `-abc`) has exactly one documented reading.
//! * *Failures as data*:
//! Missing values and unconvertible values come back as a [`ConversionError`], never a panic.
//! Defaults go through the same conversion as command line text.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/demo_summer.rs")]
//! ```
//!
//! ```console
//! $ summer 1 2 3
//! Sum: 6
//!
//! $ summer --start 10 1 -2
//! Sum: 9
//!
//! $ summer 1 blah
//! Parse error: cannot convert 'blah' to i64.
//! ```
//!
//! # Builder Api
//! Configure `argsift` by starting with a [`CommandLineParser`], optionally setting a [`Mode`] and registering parameter names.
//! `build` produces a [`GeneralParser`], which classifies tokens into an immutable [`Arguments`].
//!
//! ```
//! use argsift::{CommandLineParser, Mode};
//!
//! let parser = CommandLineParser::new()
//!     .mode(Mode::SINGLE_DASH_IS_MULTIFLAG)
//!     .param("name")
//!     .build();
//! let arguments = parser.parse_tokens(&["-xv", "--name", "bob", "file.txt"]);
//!
//! assert!(arguments.flag("x") && arguments.flag("v"));
//! assert_eq!(arguments.param("name"), Some("bob"));
//! assert_eq!(arguments.positional(0), Some("file.txt"));
//! ```
//!
//! ### Queries
//! * [`Arguments::flag`]: whether a flag appeared; accepts a name or alternatives (`["v", "verbose"]`).
//! * [`Arguments::positional`] & [`Arguments::value_at`]: the positional at an index, in command line order.
//! * [`Arguments::param`] & [`Arguments::value`]: the first parameter value for the first matching name (alternatives are tried in list order).
//! * [`Arguments::get`], [`Arguments::get_or`], [`Arguments::get_at`], [`Arguments::get_at_or`]: typed conversion via [`std::str::FromStr`].
//!
//! Query names ignore leading dashes, so `"--verbose"`, `"-verbose"`, and `"verbose"` are the same query.
//!
//! ### Defaults
//! A default is rendered via [`std::fmt::Display`], then parsed back via [`std::str::FromStr`].
//! This means a default fails exactly like command line text would.
//!
//! ```
//! use argsift::{CommandLineParser, ConversionError};
//!
//! let arguments = CommandLineParser::new().build().parse_tokens(&["--limit"]);
//! assert_eq!(arguments.get_or::<u32>("count", 42), Ok(42));
//! assert!(matches!(
//!     arguments.get_or::<u8>("count", 300),
//!     Err(ConversionError::InvalidConversion { .. })
//! ));
//! ```
//!
//! # Cli Semantics
//! `argsift` reads the tokens left to right, looking at most one token ahead.
//!
//! * A token is positional if it does not start with `-`, or if it reads entirely as a number (ex: `-3.5`, `-1e5`).
//! `-1a`, `-inf`, and a bare `-` are options.
//! * Otherwise the token is an option, and its leading dashes are stripped to produce its name.
//! * `--key=value` (or `-k=value`) is a parameter, split on the first `=`.
//! Disabled by [`Mode::NO_SPLIT_ON_EQUALSIGN`].
//! * With [`Mode::SINGLE_DASH_IS_MULTIFLAG`], `-abc` is the flags `a`, `b`, and `c`, unless `abc` is itself registered.
//! When the final letter is a registered parameter, it takes the next token as its value: `-abc v` is flags `a` & `b` plus `c=v`.
//! * An option which is the final token, or which is followed by another option, is a flag.
//! * A registered option followed by a value is a parameter and takes that value.
//! * An unregistered option followed by a value is a flag by default ([`Mode::PREFER_FLAG_FOR_UNREG_OPTION`]), leaving the value as a positional.
//! With [`Mode::PREFER_PARAM_FOR_UNREG_OPTION`] it is a parameter instead.
//! Setting both preferences is a [`ConfigError`].
//!
//! ```console
//! Tokens            | Registered | Mode              | Positionals | Flags    | Parameters
//! ---------------------------------------------------------------------------------------
//! --verbose f.txt   |            | (default)         | f.txt       | verbose  |
//! --verbose f.txt   |            | PREFER_PARAM      |             |          | verbose=f.txt
//! --limit -3.14     |            | (default)         | -3.14       | limit    |
//! --limit -3.14     | limit      | (default)         |             |          | limit=-3.14
//! --key=val         |            | (default)         |             |          | key=val
//! --key=val         |            | NO_SPLIT          |             | key=val  |
//! -abc              |            | MULTIFLAG         |             | a, b, c  |
//! -abc v            | c          | MULTIFLAG         |             | a, b     | c=v
//! -abc              | c          | MULTIFLAG         |             | a, b, c  |
//! ```
//!
//! # Features
//! * `tracing_debug`: Emit a `tracing` debug event for each classification decision.
pub use argsift_core::*;
