fn main() {
    env_logger::init();
    if let Err(err) = stylecast::run_from_env() {
        eprintln!("error: {}", err.message);
        std::process::exit(1);
    }
}
