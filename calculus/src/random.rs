use rand::Rng;

use crate::ast::{Name, Term};
use crate::eval::step;

const VARIABLE_WEIGHT: f64 = 0.3;
const APPLICATION_WEIGHT: f64 = 0.8;

/// How many candidates `generate_demo` draws before settling for the best
/// trace seen so far.
const MAX_DEMO_ATTEMPTS: usize = 64;

/// A randomly drawn term together with its deduplicated reduction trace.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Demo {
    pub term: Term,
    pub steps: Vec<String>,
}

/// Draws a random term of at most `depth` nesting levels, with every name
/// taken from `alphabet`.
///
/// At depth zero the term is always a variable. Above that, a 0.3 draw picks
/// a variable; otherwise a second independent 0.8 draw picks an application
/// over an abstraction.
///
/// Panics if `alphabet` is empty.
pub fn random_term<R: Rng + ?Sized>(rng: &mut R, depth: u32, alphabet: &[Name]) -> Term {
    if depth == 0 || rng.gen::<f64>() < VARIABLE_WEIGHT {
        Term::Var(pick(rng, alphabet))
    } else if rng.gen::<f64>() < APPLICATION_WEIGHT {
        Term::Apply(
            random_term(rng, depth - 1, alphabet).into(),
            random_term(rng, depth - 1, alphabet).into(),
        )
    } else {
        Term::Abs(
            pick(rng, alphabet),
            random_term(rng, depth - 1, alphabet).into(),
        )
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[Name]) -> Name {
    alphabet[rng.gen_range(0..alphabet.len())]
}

/// Renders `steps` reduction passes of `term`, oldest first, with every
/// repeated rendering dropped wherever it recurs.
pub fn trace(term: &Term, steps: usize) -> Vec<String> {
    let mut term = term.clone();
    let mut rendered = Vec::with_capacity(steps);
    for _ in 0..steps {
        term = step(&term);
        rendered.push(term.to_string());
    }
    unique_in_order(rendered)
}

fn unique_in_order(rendered: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(rendered.len());
    for entry in rendered {
        if !unique.contains(&entry) {
            unique.push(entry);
        }
    }
    unique
}

/// Draws random terms until one reduces through at least `min_unique_steps`
/// distinct renderings within `steps` passes.
///
/// The search is capped at a fixed number of attempts; if no candidate
/// reaches the threshold, the one with the longest trace is returned.
pub fn generate_demo<R: Rng + ?Sized>(
    rng: &mut R,
    depth: u32,
    alphabet: &[Name],
    min_unique_steps: usize,
    steps: usize,
) -> Demo {
    let mut best = candidate(rng, depth, alphabet, steps);
    for _ in 1..MAX_DEMO_ATTEMPTS {
        if best.steps.len() >= min_unique_steps {
            break;
        }
        let next = candidate(rng, depth, alphabet, steps);
        if next.steps.len() > best.steps.len() {
            best = next;
        }
    }
    best
}

fn candidate<R: Rng + ?Sized>(rng: &mut R, depth: u32, alphabet: &[Name], steps: usize) -> Demo {
    let term = random_term(rng, depth, alphabet);
    let steps = trace(&term, steps);
    Demo { term, steps }
}

#[cfg(test)]
mod test {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::parser::parse;

    const ALPHABET: [Name; 5] = ['a', 'b', 'c', 'd', 'e'];

    // StepRng yields a constant, so gen::<f64>() is a constant in [0,1):
    // 0 maps to 0.0, 1 << 63 to 0.5, 0xE000... to 0.875.
    fn always_low() -> StepRng {
        StepRng::new(0, 0)
    }
    fn always_mid() -> StepRng {
        StepRng::new(1 << 63, 0)
    }
    fn always_high() -> StepRng {
        StepRng::new(0xE000_0000_0000_0000, 0)
    }

    #[test]
    fn depth_zero_is_always_a_variable() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            match random_term(&mut rng, 0, &ALPHABET) {
                Term::Var(name) => assert!(ALPHABET.contains(&name)),
                other => panic!("expected a variable, got {other:?}"),
            }
        }
    }

    #[test]
    fn low_draws_pick_variables() {
        let mut rng = always_low();
        assert!(matches!(
            random_term(&mut rng, 5, &ALPHABET),
            Term::Var(_)
        ));
    }

    #[test]
    fn mid_draws_pick_applications() {
        let mut rng = always_mid();
        assert!(matches!(
            random_term(&mut rng, 1, &ALPHABET),
            Term::Apply(_, _)
        ));
    }

    #[test]
    fn high_draws_pick_abstractions() {
        let mut rng = always_high();
        match random_term(&mut rng, 1, &ALPHABET) {
            Term::Abs(param, body) => {
                assert!(ALPHABET.contains(&param));
                assert!(matches!(*body, Term::Var(_)));
            }
            other => panic!("expected an abstraction, got {other:?}"),
        }
    }

    #[test]
    fn names_are_drawn_from_the_alphabet() {
        let mut rng = StdRng::seed_from_u64(11);
        fn check(term: &Term, alphabet: &[Name]) {
            match term {
                Term::Var(name) => assert!(alphabet.contains(name)),
                Term::Abs(param, body) => {
                    assert!(alphabet.contains(param));
                    check(body, alphabet);
                }
                Term::Apply(lhs, rhs) => {
                    check(lhs, alphabet);
                    check(rhs, alphabet);
                }
            }
        }
        for _ in 0..20 {
            check(&random_term(&mut rng, 5, &ALPHABET), &ALPHABET);
        }
    }

    #[test]
    fn deduplication_is_global_not_adjacent() {
        let rendered = vec![
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
            "c".to_string(),
        ];
        assert_eq!(unique_in_order(rendered), vec!["a", "b", "c"]);
    }

    #[test]
    fn trace_collapses_repeated_renderings() {
        // Omega reproduces itself on every pass.
        let omega = parse("(λx.xx)(λx.xx)").unwrap();
        assert_eq!(trace(&omega, 4), vec![omega.to_string()]);
    }

    #[test]
    fn trace_renders_each_pass() {
        let term = parse("(λx.x)((λy.y)z)").unwrap();
        assert_eq!(trace(&term, 4), vec!["(λy.yz)", "z"]);
    }

    #[test]
    fn demo_meets_the_uniqueness_threshold_when_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let demo = generate_demo(&mut rng, 5, &ALPHABET, 4, 4);
        assert!(!demo.steps.is_empty());
        assert!(!demo.term.to_string().is_empty());
    }

    #[test]
    fn demo_terminates_when_the_threshold_is_unreachable() {
        // 4 passes can never produce 100 unique renderings; the attempt cap
        // kicks in and the best-effort candidate comes back.
        let mut rng = StdRng::seed_from_u64(42);
        let demo = generate_demo(&mut rng, 2, &ALPHABET, 100, 4);
        assert!(!demo.steps.is_empty());
        assert!(demo.steps.len() <= 4);
    }
}
