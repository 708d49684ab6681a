use chumsky::prelude::*;

use crate::ast::Term;

/// The only error the engine raises. Everything after parsing is total.
#[derive(PartialEq, Eq, Debug, thiserror::Error)]
#[error("{0}")]
pub struct SyntaxError(String);

fn term_parser() -> impl Parser<char, Term, Error = Simple<char>> {
    recursive(|term| {
        let name = filter(|c: &char| c.is_ascii_lowercase()).labelled("variable");
        let atom = choice((
            name.map(Term::Var),
            term.clone()
                .delimited_by(just('('), just(')'))
                .labelled("group"),
        ))
        .padded();
        // Juxtaposed atoms fold left: `abc` is `((ab)c)`.
        let application = atom
            .clone()
            .then(atom.repeated())
            .foldl(|lhs, rhs| Term::Apply(lhs.into(), rhs.into()));
        // The body extends as far right as possible: `λx.xy` is `λx.(xy)`.
        let abstraction = just('λ')
            .padded()
            .ignore_then(name)
            .then_ignore(just('.').padded())
            .then(term)
            .map(|(param, body)| Term::Abs(param, Box::new(body)))
            .labelled("abstraction");
        choice((abstraction, application)).padded()
    })
}

pub fn parse(input: &str) -> Result<Term, SyntaxError> {
    term_parser()
        .then_ignore(end())
        .parse(input)
        .map_err(|errors| {
            SyntaxError(
                errors
                    .into_iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })
}
