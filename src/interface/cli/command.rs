//! CLI 명령 파싱 모듈.

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lintpilot")]
#[command(about = "Configurable static analysis for source trees")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Report width in columns, or "auto" to match the terminal
    #[arg(
        long = "report-width",
        value_name = "WIDTH",
        global = true,
        action = ArgAction::Append,
        num_args = 1
    )]
    report_width: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective settings resolution as JSON
    Config,
}

pub enum CliAction {
    InspectSettings,
}

impl Cli {
    /// 파싱 결과를 실행 액션으로 변환한다.
    /// `--report-width` 값은 리졸버가 원시 토큰에서 직접 해석하므로(첫 출현 우선),
    /// 여기서는 clap이 토큰을 거부하지 않도록 선언만 하고 소비하지 않는다.
    pub fn parse_action() -> CliAction {
        let cli = Cli::parse();

        if cli.report_width.len() > 1 {
            tracing::debug!(
                values = ?cli.report_width,
                "repeated --report-width flags; first occurrence wins"
            );
        }

        match cli.command {
            Commands::Config => CliAction::InspectSettings,
        }
    }
}
