use std::collections::BTreeMap;

/// The collections produced by a single classification pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Classification {
    /// Positional arguments, in command line order.
    pub positionals: Vec<String>,
    /// Flag multiset: name -> occurrences.
    pub flags: BTreeMap<String, usize>,
    /// Parameter multimap: name -> values in command line order.
    pub params: BTreeMap<String, Vec<String>>,
}

impl Classification {
    pub(super) fn push_positional(&mut self, token: impl Into<String>) {
        self.positionals.push(token.into());
    }

    pub(super) fn insert_flag(&mut self, name: impl Into<String>) {
        *self.flags.entry(name.into()).or_default() += 1;
    }

    pub(super) fn insert_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params
            .entry(name.into())
            .or_default()
            .push(value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_multiplicity() {
        let mut classification = Classification::default();
        classification.insert_flag("v");
        classification.insert_flag("q");
        classification.insert_flag("v");
        assert_eq!(
            classification.flags,
            BTreeMap::from([("q".to_string(), 1), ("v".to_string(), 2)])
        );
    }

    #[test]
    fn param_values_keep_order() {
        let mut classification = Classification::default();
        classification.insert_param("k", "2");
        classification.insert_param("a", "x");
        classification.insert_param("k", "1");
        assert_eq!(
            classification.params.get("k").unwrap(),
            &vec!["2".to_string(), "1".to_string()]
        );
        assert_eq!(classification.params.len(), 2);
    }

    #[test]
    fn positionals_keep_order() {
        let mut classification = Classification::default();
        classification.push_positional("b");
        classification.push_positional("a");
        assert_eq!(classification.positionals, vec!["b", "a"]);
    }
}
