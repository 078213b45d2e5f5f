//! `lintpilot` 바이너리 진입점.

use lintpilot::interface::cli::{AppComposition, Cli, CliAction};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let action = Cli::parse_action();
    let composition = AppComposition::default();

    match action {
        CliAction::InspectSettings => {
            let args: Vec<String> = std::env::args().skip(1).collect();
            match composition.inspect_settings_usecase().execute(&args) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
    }
}
