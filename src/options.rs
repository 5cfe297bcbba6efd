/// Settings that change how input is accepted.
///
/// The defaults describe strict evaluation: the whole input must form one
/// expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Stop after the first complete expression and ignore whatever follows,
    /// so `1 + 1 )` evaluates to `2` instead of failing.
    pub allow_trailing_tokens: bool,
}

impl Options {
    /// Options that ignore tokens left over after a complete expression.
    #[must_use]
    pub const fn lenient() -> Self {
        Self { allow_trailing_tokens: true }
    }
}
