use std::collections::BTreeSet;
use std::str::FromStr;

use crate::api::{ConversionError, Source, Value};
use crate::classifier::{trim_leading_dashes, Classification};
use crate::prelude::Names;

/// The classified command line: positional arguments, flags, and parameters.
///
/// All queries are reads over an immutable snapshot; asking twice gives the same answer.
/// Query names have their leading dashes ignored, so `"--verbose"` and `"verbose"` are equivalent.
///
/// ### Example
/// ```
/// # use argsift_core as argsift;
/// use argsift::CommandLineParser;
///
/// let parser = CommandLineParser::new().param("count").build();
/// let arguments = parser.parse_tokens(&["input.txt", "--count", "3", "--verbose", "-2.5"]);
///
/// assert!(arguments.flag(["v", "verbose"]));
/// assert_eq!(arguments.get::<u32>("count"), Ok(3));
/// assert_eq!(arguments.get_or::<u32>("limit", 10), Ok(10));
/// assert_eq!(arguments.get_at::<f64>(1), Ok(-2.5));
/// assert_eq!(arguments.positional(0), Some("input.txt"));
/// assert_eq!(arguments.positional(2), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    classification: Classification,
    registered: BTreeSet<String>,
}

impl Arguments {
    pub(crate) fn new(classification: Classification, registered: BTreeSet<String>) -> Self {
        Self {
            classification,
            registered,
        }
    }

    /// Whether any of the `names` appeared as a flag.
    pub fn flag(&self, names: impl Names) -> bool {
        names
            .names()
            .into_iter()
            .any(|name| self.flag_count(name) > 0)
    }

    /// The number of times `name` appeared as a flag (ex: `-vvv` in multi-flag mode counts `v` 3 times).
    pub fn flag_count(&self, name: &str) -> usize {
        self.classification
            .flags
            .get(trim_leading_dashes(name))
            .copied()
            .unwrap_or(0)
    }

    /// Every flag, in name order, repeated by its occurrence count.
    pub fn flags(&self) -> impl Iterator<Item = &str> + '_ {
        self.classification
            .flags
            .iter()
            .flat_map(|(name, count)| std::iter::repeat(name.as_str()).take(*count))
    }

    /// The positional argument at `index`, or `None` when out of range.
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.classification
            .positionals
            .get(index)
            .map(String::as_str)
    }

    /// Every positional argument, in command line order.
    pub fn positionals(&self) -> &[String] {
        &self.classification.positionals
    }

    /// The number of positional arguments.
    pub fn len(&self) -> usize {
        self.classification.positionals.len()
    }

    /// Whether there are no positional arguments.
    pub fn is_empty(&self) -> bool {
        self.classification.positionals.is_empty()
    }

    /// Iterate the positional arguments, in command line order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.classification.positionals.iter()
    }

    /// The value of the first of `names` (in list order) which appeared as a parameter.
    /// When a parameter repeats, this is its first value.
    pub fn param(&self, names: impl Names) -> Option<&str> {
        self.lookup(&names.names())
    }

    /// Every value of the parameter `name`, in command line order.
    pub fn param_values(&self, name: &str) -> &[String] {
        self.classification
            .params
            .get(trim_leading_dashes(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every `(name, value)` parameter pair, in name order and then command line order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.classification
            .params
            .iter()
            .flat_map(|(name, values)| {
                values
                    .iter()
                    .map(move |value| (name.as_str(), value.as_str()))
            })
    }

    /// Whether `name` was registered as a parameter on the parser.
    pub fn registered(&self, name: &str) -> bool {
        self.registered.contains(trim_leading_dashes(name))
    }

    /// The parameter value for `names`, which may be absent.
    pub fn value(&self, names: impl Names) -> Value<'_> {
        let names = names.names();
        let source = Source::parameter(&names);

        match self.lookup(&names) {
            Some(text) => Value::found(text, source),
            None => Value::absent(source),
        }
    }

    /// The parameter value for `names`, or else `default` rendered as text.
    pub fn value_or(&self, names: impl Names, default: impl std::fmt::Display) -> Value<'_> {
        self.value(names).or_default(default)
    }

    /// The positional argument at `index`, which may be absent.
    pub fn value_at(&self, index: usize) -> Value<'_> {
        let source = Source::Positional(index);

        match self.positional(index) {
            Some(text) => Value::found(text, source),
            None => Value::absent(source),
        }
    }

    /// The positional argument at `index`, or else `default` rendered as text.
    pub fn value_at_or(&self, index: usize, default: impl std::fmt::Display) -> Value<'_> {
        self.value_at(index).or_default(default)
    }

    /// Convert the parameter value for `names` into `T`.
    pub fn get<T: FromStr>(&self, names: impl Names) -> Result<T, ConversionError> {
        self.value(names).parse()
    }

    /// Convert the parameter value for `names` into `T`, falling back to `default`.
    pub fn get_or<T: FromStr>(
        &self,
        names: impl Names,
        default: impl std::fmt::Display,
    ) -> Result<T, ConversionError> {
        self.value_or(names, default).parse()
    }

    /// Convert the positional argument at `index` into `T`.
    pub fn get_at<T: FromStr>(&self, index: usize) -> Result<T, ConversionError> {
        self.value_at(index).parse()
    }

    /// Convert the positional argument at `index` into `T`, falling back to `default`.
    pub fn get_at_or<T: FromStr>(
        &self,
        index: usize,
        default: impl std::fmt::Display,
    ) -> Result<T, ConversionError> {
        self.value_at_or(index, default).parse()
    }

    fn lookup(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| {
            self.classification
                .params
                .get(trim_leading_dashes(name))
                .and_then(|values| values.first())
                .map(String::as_str)
        })
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
