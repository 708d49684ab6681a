/// A variable or binder name, a single lowercase ASCII letter.
pub type Name = char;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Term {
    /// `x`
    Var(Name),
    /// `λx.t`
    Abs(Name, Box<Term>),
    /// `t t`
    Apply(Box<Term>, Box<Term>),
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Term::*;
        match self {
            Var(name) => write!(f, "{name}"),
            Abs(param, body) => write!(f, "λ{param}.{body}"),
            // An application is parenthesized iff its argument is a bare
            // variable; any other argument shape prints unwrapped.
            Apply(lhs, rhs) => match rhs.as_ref() {
                Var(_) => write!(f, "({lhs}{rhs})"),
                _ => write!(f, "{lhs}{rhs}"),
            },
        }
    }
}
