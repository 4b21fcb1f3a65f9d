fn main() {
    if let Err(err) = zettelkasten_cli::entry() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
