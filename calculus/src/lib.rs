pub mod ast;
pub mod eval;
pub mod parser;
pub mod random;

pub use ast::{Name, Term};
pub use eval::{normalize, step, substitute};
pub use parser::{parse, SyntaxError};
pub use random::{generate_demo, random_term, trace, Demo};
