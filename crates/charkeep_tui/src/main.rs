use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use charkeep_core::repository;
use charkeep_tui::{App, run};

fn main() {
    // Optional argument: the directory holding characters.json/.xml.
    let mut args = std::env::args().skip(1);
    let dir = args.next().map(PathBuf::from);
    if args.next().is_some() {
        eprintln!("Usage: charkeep-tui [DATA_DIR]");
        process::exit(2);
    }

    let mut app = match dir {
        Some(dir) => App::new(
            dir.join(repository::JSON_FILE),
            dir.join(repository::XML_FILE),
        ),
        None => App::with_default_paths(),
    };

    let stdin = io::stdin();
    let mut input = BufReader::new(stdin.lock());
    let mut out = io::stdout();
    if let Err(e) = run(&mut app, &mut input, &mut out) {
        eprintln!("I/O error: {e}");
        process::exit(1);
    }
}
