use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use trivia_intake::{
    Config, DEFAULT_INTRO, DEFAULT_MAX_QUESTIONS, DEFAULT_OUTPUT_PATH, DEFAULT_QUESTIONS_PATH,
    OutputFormat, TriviaGame, terminal,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text file to load the questions from, one per line
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// File the status record is written to (overwritten on each run)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Maximum number of questions kept in memory
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_MAX_QUESTIONS as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    max_questions: u64,

    /// Append a completion marker to the question file after loading
    #[arg(long)]
    mark_complete: bool,

    /// Format of the status record
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            intro: DEFAULT_INTRO.to_string(),
            questions_path: self.questions,
            output_path: self.output,
            max_questions: usize::try_from(self.max_questions).unwrap_or(usize::MAX),
            mark_complete: self.mark_complete,
            format: self.format,
        }
    }
}

fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let stderr_layer = fmt::layer().with_writer(io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let game = TriviaGame::new(args.into_config());
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    match game.run(&mut input, &mut out) {
        Ok(report) => {
            drop(out);
            if report.truncated {
                terminal::warn(&format!(
                    "Only the first {} questions were loaded; some input may have been dropped.",
                    game.config().max_questions
                ));
            }
            terminal::success(&format!(
                "Loaded {} questions. Status written to {}.",
                report.questions_loaded,
                game.config().output_path.display()
            ));
            ExitCode::SUCCESS
        }
        Err(e) => {
            drop(out);
            terminal::error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code())
        }
    }
}
