use clap::Parser;
use config::Config;
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

mod config;
mod output;
mod secrets;

/// Generate a random hex secret for signing JWTs.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of random bytes to generate
    #[arg(short, long, value_name = "BYTES")]
    length: Option<usize>,

    /// TOML file with a [secret] section
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    // Setup logger
    env_logger::Builder::new()
        .filter_level(log_filter(std::env::var("RUST_LOG").ok()))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                chrono::Local::now().format("%T%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();

    let length = match resolve_length(&args) {
        Ok(length) => length,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    log::info!("Generating {length} byte secret");

    let secret = match secrets::generate(length) {
        Ok(secret) => secret,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = output::write_secret(&mut stdout, &secret) {
        log::error!("Failed to write secret: {e}");
        std::process::exit(1);
    }
}

/// Errors are always reported, even with `RUST_LOG=off`.
fn log_filter(var: Option<String>) -> LevelFilter {
    let filter =
        LevelFilter::from_str(var.as_deref().unwrap_or("warn")).unwrap_or(LevelFilter::Warn);
    filter.max(LevelFilter::Error)
}

fn resolve_length(args: &Args) -> Result<usize, config::LoadError> {
    if let Some(length) = args.length {
        return Ok(length);
    }

    let Some(path) = args.config.as_ref() else {
        return Ok(secrets::DEFAULT_SECRET_LENGTH);
    };

    log::debug!("Loading config from {}", path.display());
    let cfg = Config::load(path)?;

    Ok(cfg.secret.length.unwrap_or(secrets::DEFAULT_SECRET_LENGTH))
}
