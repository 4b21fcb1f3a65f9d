//! Short binary name (`zk`) that forwards to the `zettelkasten_cli` library.
//! Keeping the alias as a real binary avoids shell alias requirements.

fn main() {
    if let Err(err) = zettelkasten_cli::entry() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
