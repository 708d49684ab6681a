use anyhow::{bail, Result};
use calculus::{generate_demo, normalize, parse, step, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustyline::{error::ReadlineError, Editor};

const HISTORY: &str = "/tmp/calculus.history";

const MAX_REDUCTIONS: usize = 100;
const TRACE_STEPS: usize = 4;
const DEMO_DEPTH: u32 = 5;
const DEMO_ALPHABET: [char; 5] = ['a', 'b', 'c', 'd', 'e'];
const DEMO_MIN_UNIQUE_STEPS: usize = 4;

fn exec(input: &str) -> Result<()> {
    if let Some(input) = input.strip_prefix("parse") {
        let term = parse(input.trim())?;
        println!("{term:?}");
    } else if let Some(input) = input.strip_prefix("step") {
        let term = parse(input.trim())?;
        println!("{}", step(&term));
    } else if let Some(input) = input.strip_prefix("trace") {
        let term = parse(input.trim())?;
        for line in trace(&term, TRACE_STEPS) {
            println!("{line}");
        }
    } else if input.trim() == "random" {
        let mut rng = StdRng::from_entropy();
        let demo = generate_demo(
            &mut rng,
            DEMO_DEPTH,
            &DEMO_ALPHABET,
            DEMO_MIN_UNIQUE_STEPS,
            TRACE_STEPS,
        );
        println!("{}", demo.term);
        for line in demo.steps {
            println!("  {line}");
        }
    } else {
        let term = parse(input)?;
        println!("{}", normalize(&term, MAX_REDUCTIONS));
    }
    Ok(())
}

fn main() -> Result<()> {
    println!("Lambda-calculus REPL. Commands: parse/step/trace/random, or a bare expression.");
    let mut editor = Editor::<()>::new();
    editor.load_history(HISTORY).ok();
    loop {
        match editor.readline("λ> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str());
                if let Err(e) = exec(&line) {
                    eprintln!("Error: {e}");
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Bye!");
                break;
            }
            Err(e) => bail!(e),
        }
    }
    editor.save_history(HISTORY).ok();
    Ok(())
}
