//! Built-in combinators.

/// Identity of a primitive cell. `K1`, `S1` and `C1` carry the argument they
/// captured; the rest carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    K,
    K1,
    S,
    S1,
    C,
    C1,
    /// `K I`: discards its argument and returns the identity.
    KI,
    Inc,
    Read,
}

impl Rule {
    pub const ALL: [Rule; 9] = [
        Rule::K,
        Rule::K1,
        Rule::S,
        Rule::S1,
        Rule::C,
        Rule::C1,
        Rule::KI,
        Rule::Inc,
        Rule::Read,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::K => "K",
            Rule::K1 => "K1",
            Rule::S => "S",
            Rule::S1 => "S1",
            Rule::C => "C",
            Rule::C1 => "C1",
            Rule::KI => "KI",
            Rule::Inc => "Inc",
            Rule::Read => "Read",
        }
    }

    pub fn from_name(name: &str) -> Option<Rule> {
        Rule::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// Whether a primitive of this rule carries an argument.
    pub fn has_arg(self) -> bool {
        matches!(self, Rule::K1 | Rule::S1 | Rule::C1)
    }
}
