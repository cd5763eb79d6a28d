//! CLI entry point and command dispatch for validators.

mod cmd;
mod ui;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use tracing_subscriber::EnvFilter;

use validators::config::{Config, OutputFormat};
use validators::{CheckOptions, ValidatorKind};

#[derive(Parser)]
#[command(name = "validators")]
#[command(version)]
#[command(
    about = "Validate emails, URLs, IPs, hashes, card numbers and other string formats",
    long_about = None
)]
#[command(
    after_help = "EXAMPLES:\n    validators check email someone@example.com\n    validators check ipv4 10.0.0.0/8 --private\n    cat urls.txt | validators check url - --format json\n    validators list"
)]
struct Cli {
    /// Only report failures (also VALIDATORS_QUIET=1)
    #[arg(long, short, global = true)]
    quiet: bool,
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one or more values
    ///
    /// Exits with status 1 if any value fails.
    Check {
        /// Validator to run (see `validators list`)
        kind: ValidatorKind,
        /// Values to validate; `-` reads one value per line from stdin
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
        #[command(flatten)]
        flags: CheckFlags,
        /// Output format: text or json (overrides config)
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },
    /// List every validator with a short description
    List,
    /// Show the effective configuration
    Config {
        /// Print the config file locations instead
        #[arg(long)]
        path: bool,
    },
    /// Generate shell completion script
    #[command(alias = "completions")]
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version information (commit and build date with --verbose)
    Version,
}

/// Validator flags. Flags only ever switch a setting away from its
/// configured value.
#[derive(Args, Debug, Default)]
struct CheckFlags {
    /// Domains must end in a known top-level domain
    #[arg(long)]
    consider_tld: bool,
    /// Allow a trailing dot in domain names
    #[arg(long)]
    rfc_1034: bool,
    /// Allow underscores in domain names
    #[arg(long)]
    rfc_2782: bool,
    /// Accept single-label hosts in URLs and emails
    #[arg(long)]
    simple_host: bool,
    /// Reject single-label names in `hostname`
    #[arg(long)]
    no_simple_hostname: bool,
    /// Reject IPv4 addresses as hosts in `hostname` and `url`
    #[arg(long)]
    skip_ipv4: bool,
    /// Reject IPv6 addresses as hosts in `hostname` and `url`
    #[arg(long)]
    skip_ipv6: bool,
    /// Accept query fields without `=` in URLs
    #[arg(long)]
    lax_query: bool,
    /// Only accept private IPv4 addresses and hosts
    #[arg(long, conflicts_with = "public")]
    private: bool,
    /// Only accept public IPv4 addresses and hosts
    #[arg(long)]
    public: bool,
    /// Reject a `:port` suffix on hosts and URLs
    #[arg(long)]
    no_port: bool,
    /// Reject CIDR notation for IP addresses
    #[arg(long)]
    no_cidr: bool,
    /// Require CIDR notation for IP addresses
    #[arg(long)]
    strict: bool,
    /// Reject networks with host bits set
    #[arg(long)]
    no_host_bit: bool,
    /// Require a bracketed IPv4 literal as the email domain
    #[arg(long, conflicts_with = "ipv6_address")]
    ipv4_address: bool,
    /// Require a bracketed IPv6 literal as the email domain
    #[arg(long)]
    ipv6_address: bool,
    /// Lower bound for `between` and `length`
    #[arg(long, allow_negative_numbers = true)]
    min: Option<f64>,
    /// Upper bound for `between` and `length`
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,
}

impl CheckFlags {
    fn apply(&self, opts: &mut CheckOptions) {
        opts.consider_tld |= self.consider_tld;
        opts.rfc_1034 |= self.rfc_1034;
        opts.rfc_2782 |= self.rfc_2782;
        opts.simple_host |= self.simple_host;
        if self.no_simple_hostname {
            opts.maybe_simple = false;
        }
        opts.skip_ipv4_addr |= self.skip_ipv4;
        opts.skip_ipv6_addr |= self.skip_ipv6;
        if self.lax_query {
            opts.strict_query = false;
        }
        if self.private {
            opts.private = Some(true);
        } else if self.public {
            opts.private = Some(false);
        }
        if self.no_port {
            opts.may_have_port = false;
        }
        if self.no_cidr {
            opts.cidr = false;
        }
        opts.strict |= self.strict;
        if self.no_host_bit {
            opts.host_bit = false;
        }
        opts.ipv4_address |= self.ipv4_address;
        opts.ipv6_address |= self.ipv6_address;
        if self.min.is_some() {
            opts.min = self.min;
        }
        if self.max.is_some() {
            opts.max = self.max;
        }
    }
}

fn main() -> Result<()> {
    // Spawn the real work on a thread with a larger stack size.
    // Windows defaults to a 1MB stack, which the regex compiler can exhaust
    // in debug builds.
    const STACK_SIZE: usize = 8 * 1024 * 1024; // 8 MB

    let thread = std::thread::Builder::new()
        .stack_size(STACK_SIZE)
        .spawn(run)
        .expect("failed to spawn main thread");

    match thread.join() {
        Ok(result) => result,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            kind,
            values,
            flags,
            format,
        } => {
            let config = Config::load()?;
            config.install()?;

            let mut opts = config.check_options();
            flags.apply(&mut opts);
            let format = format.unwrap_or(config.format);
            let quiet = cli.quiet || config.quiet;

            let values = cmd::check::collect_values(values, io::stdin().lock())?;
            let all_valid = cmd::check::cmd_check(kind, &values, &opts, format, quiet)?;
            if !all_valid {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::List => cmd::list::cmd_list(),
        Commands::Config { path } => cmd::config::cmd_config(path),
        Commands::Completion { shell } => cmd_completion(shell),
        Commands::Version => cmd_version(cli.verbose),
    }
}

/// Log to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "validators", &mut io::stdout());
    Ok(())
}

fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("validators {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}
