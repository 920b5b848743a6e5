mod gen;

use std::env;

fn main() {
    match env::args().nth(1).as_deref() {
        Some("gen") => gen::gen(),
        Some(other) => {
            eprintln!("Unknown task: {other}");
            eprintln!("Available tasks: gen");
            std::process::exit(1);
        }
        None => eprintln!("Usage: cargo xtask <gen>"),
    }
}
