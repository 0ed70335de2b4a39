use clap::Parser;
use color_eyre::Result;
use std::io::{BufWriter, Write, stdout};

use blockstat::error::BlockstatError;
use blockstat::{analyze, config, write_report};

/// Extract delimited text blocks and print their statistics as JSON lines
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Text to scan for blocks
    #[arg(allow_hyphen_values = true)]
    text: String,

    /// Block start delimiter (only the first character is used)
    #[arg(allow_hyphen_values = true, value_parser = parse_left)]
    left_delimiter: char,

    /// Block end delimiter (only the first character is used)
    #[arg(allow_hyphen_values = true, value_parser = parse_right)]
    right_delimiter: char,
}

fn first_char(arg: &str, which: &'static str) -> Result<char, BlockstatError> {
    arg.chars()
        .next()
        .ok_or(BlockstatError::EmptyDelimiter(which))
}

fn parse_left(arg: &str) -> Result<char, BlockstatError> {
    first_char(arg, "Left")
}

fn parse_right(arg: &str) -> Result<char, BlockstatError> {
    first_char(arg, "Right")
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    init_logging();
    color_eyre::install()?;

    // Missing or empty arguments exit here with a usage message and status 2
    let args = Args::parse();

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
    }

    let report = analyze(
        &args.text,
        args.left_delimiter,
        args.right_delimiter,
        config_result.config.stats.rounding,
    );

    // Output failures are reported but do not change the exit status
    let mut out = BufWriter::new(stdout().lock());
    if let Err(e) = write_report(&mut out, &report) {
        log::error!("Failed to write statistics: {}", e);
    }

    Ok(())
}
