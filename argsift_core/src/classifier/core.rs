use std::collections::BTreeSet;

use crate::classifier::model::*;
use crate::classifier::sniff::*;
use crate::constant::EQUALS_DELIMITER;
use crate::model::Mode;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The linear scan which sorts raw tokens into positionals, flags, and parameters.
#[derive(Debug, Clone)]
pub(crate) struct Classifier {
    mode: Mode,
    registered: BTreeSet<String>,
}

impl Classifier {
    pub(crate) fn new(mode: Mode, registered: BTreeSet<String>) -> Self {
        debug_assert!(
            !mode.is_conflicted(),
            "internal error - conflicting modes must be rejected at build time"
        );
        Self { mode, registered }
    }

    pub(crate) fn is_param(&self, name: &str) -> bool {
        self.registered.contains(name)
    }

    pub(crate) fn registered(&self) -> &BTreeSet<String> {
        &self.registered
    }

    pub(crate) fn classify<S: AsRef<str>>(&self, tokens: &[S]) -> Classification {
        let mut classification = Classification::default();
        let mut index = 0;

        while index < tokens.len() {
            let token = tokens[index].as_ref();
            let next = tokens.get(index + 1).map(AsRef::as_ref);
            index += self.step(token, next, &mut classification);
        }

        classification
    }

    /// Classify `token`, using `next` for lookahead.
    /// Returns the number of tokens consumed (1 or 2).
    fn step(
        &self,
        token: &str,
        next: Option<&str>,
        classification: &mut Classification,
    ) -> usize {
        if !is_option(token) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{token}' is positional.");
            }
            classification.push_positional(token);
            return 1;
        }

        let mut name = trim_leading_dashes(token);

        if !self.mode.contains(Mode::NO_SPLIT_ON_EQUALSIGN) {
            if let Some((key, value)) = name.split_once(EQUALS_DELIMITER) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Token '{token}' splits into parameter '{key}'='{value}'.");
                }
                classification.insert_param(key, value);
                return 1;
            }
        }

        // Single dash only, and not itself a registered parameter.
        if self.mode.contains(Mode::SINGLE_DASH_IS_MULTIFLAG)
            && token.len() - name.len() == 1
            && !self.is_param(name)
        {
            let (multi_flag, trailing) = self.split_trailing_param(name);
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{token}' decomposes into flags '{multi_flag}' (trailing parameter: {trailing:?}).");
            }

            for c in multi_flag.chars() {
                classification.insert_flag(c.to_string());
            }

            match trailing {
                Some(param) => name = param,
                None => return 1,
            }
        }

        match next {
            Some(value) if !is_option(value) => {
                if self.is_param(name)
                    || self.mode.contains(Mode::PREFER_PARAM_FOR_UNREG_OPTION)
                {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Option '{name}' is a parameter with value '{value}'.");
                    }
                    classification.insert_param(name, value);
                    2
                } else {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Unregistered option '{name}' is a flag; '{value}' is left for the next step.");
                    }
                    classification.insert_flag(name);
                    1
                }
            }
            _ => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Option '{name}' has no value to take, so is a flag.");
                }
                classification.insert_flag(name);
                1
            }
        }
    }

    /// Peel the final character off `name` when it is a registered parameter.
    fn split_trailing_param<'n>(&self, name: &'n str) -> (&'n str, Option<&'n str>) {
        match name.char_indices().last() {
            Some((offset, _)) if self.is_param(&name[offset..]) => {
                (&name[..offset], Some(&name[offset..]))
            }
            _ => (name, None),
        }
    }
}
