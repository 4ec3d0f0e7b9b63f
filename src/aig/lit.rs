use std::{
    fmt::{self, Debug, Display},
    ops::Not,
};

/// Literal in aiger numbering: `2 * var` references the variable, `2 * var + 1`
/// its negation. `0` and `1` are the constants.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AigLit(u32);

impl AigLit {
    pub const FALSE: AigLit = AigLit(0);
    pub const TRUE: AigLit = AigLit(1);

    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn from_var(var: u32, compl: bool) -> Self {
        Self((var << 1) | compl as u32)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn var(self) -> u32 {
        self.0 >> 1
    }

    /// the positive literal of the same variable
    #[inline]
    pub const fn strip(self) -> Self {
        Self(self.0 & !1)
    }

    #[inline]
    pub const fn is_compl(self) -> bool {
        self.0 & 1 == 1
    }

    #[inline]
    pub const fn is_constant(self) -> bool {
        self.0 < 2
    }

    #[inline]
    pub const fn not_if(self, c: bool) -> Self {
        Self(self.0 ^ c as u32)
    }

    #[inline]
    pub const fn same_var(self, other: AigLit) -> bool {
        self.strip().0 == other.strip().0
    }
}

impl Not for AigLit {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(self.0 ^ 1)
    }
}

impl From<u32> for AigLit {
    #[inline]
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl Debug for AigLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for AigLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_compl() {
            write!(f, "!{}", self.var())
        } else {
            write!(f, "{}", self.var())
        }
    }
}

/// true iff no two of the three literals reference the same variable
#[inline]
pub fn distinct_vars(a: AigLit, b: AigLit, c: AigLit) -> bool {
    !(a.same_var(b) || a.same_var(c) || b.same_var(c))
}
