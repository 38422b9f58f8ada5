fn main() {
    if let Err(e) = home_janitor::cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
