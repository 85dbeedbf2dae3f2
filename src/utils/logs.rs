use crate::core::domain::Configuration;

pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false);
    if config.json_logs {
        // ANSI color codes confuse log collectors that ingest json lines.
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}
