mod cli;

fn main() {
    // Flags drive logging config, so parsing happens inside run().
    if let Err(err) = cli::run() {
        eprintln!("mvnscout error: {:#}", err);
        std::process::exit(1);
    }
}
