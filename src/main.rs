use h2obuddy::commands::Cli;
use h2obuddy::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("h2obuddy=debug")))
            .init();
    }

    Cli::menu()
}
