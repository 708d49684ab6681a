use crate::ast::{Name, Term};

/// Replaces every free occurrence of `name` in `target` with `value`.
///
/// A binder of the same name shadows `name` for its whole body; no descent
/// happens below it. Bound names are never renamed, so free variables of
/// `value` can be captured by a binder in `target` that reuses their name.
pub fn substitute(target: &Term, name: Name, value: &Term) -> Term {
    use Term::*;
    match target {
        Var(n) if *n == name => value.clone(),
        Var(_) => target.clone(),
        Abs(param, _) if *param == name => target.clone(),
        Abs(param, body) => Abs(*param, substitute(body, name, value).into()),
        Apply(lhs, rhs) => Apply(
            substitute(lhs, name, value).into(),
            substitute(rhs, name, value).into(),
        ),
    }
}

/// One top-down reduction pass.
///
/// Contracts each application whose function position is syntactically an
/// abstraction; the argument is substituted as-is and the substituted result
/// is not re-scanned within the same pass.
pub fn step(term: &Term) -> Term {
    use Term::*;
    match term {
        Var(_) => term.clone(),
        Abs(param, body) => Abs(*param, step(body).into()),
        Apply(lhs, rhs) => match lhs.as_ref() {
            // redex: (λp.b) a
            Abs(param, body) => substitute(body, *param, rhs),
            _ => Apply(step(lhs).into(), step(rhs).into()),
        },
    }
}

/// Applies `step` exactly `max_steps` times.
///
/// There is no fixed-point exit and no divergence detection; a term with no
/// normal form consumes the whole budget and comes back partially reduced.
pub fn normalize(term: &Term, max_steps: usize) -> Term {
    let mut term = term.clone();
    for _ in 0..max_steps {
        term = step(&term);
    }
    term
}
