mod commands;

use clap::Parser;
use corr_core::domain::CorrError;

pub fn run_from_env() -> i32 {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let corr_error = error.as_corr_error();
            eprintln!("{}", corr_error.diagnostic_line());
            eprintln!("{}", corr_error.fatal_exit_line());
            corr_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(&args) {
        Ok(cli) => commands::run_diffusivity_command(cli.args),
        Err(error) => match error.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", error);
                Ok(0)
            }
            _ => Err(CliError::Usage(error.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "correlation-rs",
    about = "Position autocorrelation and diffusion coefficient from a NAMD .traj time series"
)]
struct Cli {
    #[command(flatten)]
    args: commands::DiffusivityArgs,
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(CorrError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_corr_error(&self) -> CorrError {
        match self {
            Self::Usage(message) => CorrError::input_validation("INPUT.CLI_USAGE", message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => CorrError::internal("SYS.CLI", format!("{error:#}")),
        }
    }
}
