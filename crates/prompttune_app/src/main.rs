//! PromptTune terminal application.
mod platform;

fn main() -> std::io::Result<()> {
    platform::logging::initialize();
    platform::run_app()
}
