//! Main entry point for the keymaster CLI application

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    keymaster::logging::init();

    keymaster::cli::run()
}
