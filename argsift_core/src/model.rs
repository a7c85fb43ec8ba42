use std::ops::{BitOr, BitOrAssign};

/// The interpretation mode of the classifier.
///
/// Modes are independent bits which combine with `|`.
/// Only one of [`Mode::PREFER_FLAG_FOR_UNREG_OPTION`] and [`Mode::PREFER_PARAM_FOR_UNREG_OPTION`] may be set.
///
/// ### Example
/// ```
/// # use argsift_core as argsift;
/// use argsift::Mode;
///
/// let mode = Mode::PREFER_PARAM_FOR_UNREG_OPTION | Mode::SINGLE_DASH_IS_MULTIFLAG;
/// assert!(mode.contains(Mode::SINGLE_DASH_IS_MULTIFLAG));
/// assert!(!mode.contains(Mode::NO_SPLIT_ON_EQUALSIGN));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode(u8);

impl Mode {
    /// No mode bits set.
    pub const EMPTY: Mode = Mode(0);
    /// An unregistered option followed by a value is a flag; the value becomes a positional.
    pub const PREFER_FLAG_FOR_UNREG_OPTION: Mode = Mode(1 << 0);
    /// An unregistered option followed by a value is a parameter; the value is consumed.
    pub const PREFER_PARAM_FOR_UNREG_OPTION: Mode = Mode(1 << 1);
    /// Do not split `--key=value` into a parameter.
    pub const NO_SPLIT_ON_EQUALSIGN: Mode = Mode(1 << 2);
    /// Treat `-abc` as the flags `a`, `b`, and `c`.
    pub const SINGLE_DASH_IS_MULTIFLAG: Mode = Mode(1 << 3);

    const NAMED: [(Mode, &str); 4] = [
        (Mode::PREFER_FLAG_FOR_UNREG_OPTION, "PREFER_FLAG_FOR_UNREG_OPTION"),
        (Mode::PREFER_PARAM_FOR_UNREG_OPTION, "PREFER_PARAM_FOR_UNREG_OPTION"),
        (Mode::NO_SPLIT_ON_EQUALSIGN, "NO_SPLIT_ON_EQUALSIGN"),
        (Mode::SINGLE_DASH_IS_MULTIFLAG, "SINGLE_DASH_IS_MULTIFLAG"),
    ];

    /// Check whether every bit of `other` is set in this mode.
    pub const fn contains(&self, other: Mode) -> bool {
        self.0 & other.0 == other.0
    }

    /// The raw bits of this mode.
    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub(crate) fn is_conflicted(&self) -> bool {
        self.contains(Mode::PREFER_FLAG_FOR_UNREG_OPTION)
            && self.contains(Mode::PREFER_PARAM_FOR_UNREG_OPTION)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::PREFER_FLAG_FOR_UNREG_OPTION
    }
}

impl BitOr for Mode {
    type Output = Mode;

    fn bitor(self, rhs: Mode) -> Self::Output {
        Mode(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mode {
    fn bitor_assign(&mut self, rhs: Mode) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = Mode::NAMED
            .iter()
            .filter(|(mode, _)| self.contains(*mode))
            .map(|(_, name)| *name)
            .collect();

        if names.is_empty() {
            write!(f, "EMPTY")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

impl std::fmt::Debug for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mode({self})")
    }
}
