fn main() {
    if let Err(e) = logseq_sidekick::cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
