use bcc_core::{KeyPath, Locator, display_value};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "bcc-cli",
    about = "Print one setting from a Burp Suite user options JSON file",
    after_help = "Example:\n  bcc-cli -f /path/to/file.json -v project_options.connections.proxy.enabled",
    version
)]
struct Cli {
    /// Path to the Burp Suite user options JSON file
    #[arg(short = 'f', value_name = "PATH", default_value_os_t = bcc_core::default_config_path())]
    file: PathBuf,
    /// Enable verbose output
    #[arg(short = 'v', default_value_t = false)]
    verbose: bool,
    /// Dotted setting key, e.g. project_options.connections.proxy.enabled
    key: Option<String>,
    /// Arguments after the key are accepted and ignored
    #[arg(hide = true)]
    _rest: Vec<String>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let Some(key) = cli.key.as_deref() else {
        Cli::command().print_help().ok();
        return;
    };
    cmd_check(&cli, KeyPath::parse(key));
}

fn cmd_check(cli: &Cli, key: KeyPath) {
    debug!(file = %cli.file.display(), key = %key, "checking setting");
    let locator = Locator::open(&cli.file).unwrap_or_else(|e| {
        println!("{}", e);
        std::process::exit(e.exit_code());
    });
    match locator.find(&key) {
        Some(found) if cli.verbose => {
            println!("Reading from: {}", locator.path().display());
            if let Some(line) = found.line {
                println!("Found on line: {}", line);
            }
            println!("Setting Key: {}", key);
            println!("Setting Value: {}", display_value(found.value));
        }
        Some(found) => println!("{}", display_value(found.value)),
        None if cli.verbose => println!("Setting not found."),
        None => {}
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
