//! Moneta CLI
//!
//! Formats, parses, converts and splits money from the command line.

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use moneta_core::{CurrencyRegistry, MoneyTextCodec};
use moneta_shared::{AppConfig, AppError};
use rust_decimal::Decimal;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "moneta")]
#[command(about = "Moneta - currency-aware money toolkit", long_about = None)]
struct Cli {
    /// Locale profile (en-US, de-DE, ...); overrides the configuration
    #[arg(short, long)]
    profile: Option<String>,

    /// Local currency code; overrides the profile's currency
    #[arg(short, long)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format an amount in a currency
    Format {
        /// Amount, e.g. 1234.5
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        /// Currency code
        code: String,
        /// Style specifier: C, I, L or K with optional digits (e.g. I2)
        style: Option<String>,
    },

    /// Parse money text such as "$765.43" or "1.234,56 €"
    Parse {
        /// Text to parse
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Parse in this currency, ignoring any currency text
        #[arg(long = "as")]
        currency: Option<String>,
    },

    /// Convert an amount at an exchange rate
    Convert {
        /// Amount in the source currency
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
        /// Units of target per unit of source
        rate: Decimal,
    },

    /// Split an amount without losing minor units
    Split {
        /// Amount to split
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        /// Currency code
        code: String,
        /// Number of equal shares
        shares: Option<usize>,
        /// Comma-separated weights instead of equal shares
        #[arg(long, value_delimiter = ',')]
        ratios: Vec<u32>,
    },

    /// List registered currencies
    Currencies {
        /// Only this namespace
        #[arg(long)]
        namespace: Option<String>,
        /// Hide withdrawn currencies
        #[arg(long)]
        active: bool,
    },
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => return report(&AppError::from(err)),
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli, config) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output.trim_end());
            }
            ExitCode::SUCCESS
        }
        Err(err) => match err.downcast_ref::<AppError>() {
            Some(app) => report(app),
            None => {
                error!(error = %err, "Unexpected failure");
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli, mut config: AppConfig) -> anyhow::Result<String> {
    if let Some(profile) = cli.profile {
        config.locale.profile = profile;
    }
    if let Some(code) = cli.currency {
        config.locale.currency = Some(code);
    }

    let profile = config.locale.resolve_profile()?;
    debug!(profile = %profile.name, currency = %profile.currency_code, "Using locale profile");

    let registry = CurrencyRegistry::new();
    let codec = MoneyTextCodec::new(&registry, profile).map_err(AppError::from)?;

    let output = match cli.command {
        Commands::Format {
            amount,
            code,
            style,
        } => commands::format(&codec, &registry, amount, &code, style.as_deref())?,
        Commands::Parse { text, currency } => {
            commands::parse(&codec, &registry, &text, currency.as_deref())?
        }
        Commands::Convert {
            amount,
            from,
            to,
            rate,
        } => commands::convert(&codec, &registry, amount, &from, &to, rate)?,
        Commands::Split {
            amount,
            code,
            shares,
            ratios,
        } => commands::split(&codec, &registry, amount, &code, shares, &ratios)?,
        Commands::Currencies { namespace, active } => {
            commands::currencies(&registry, namespace.as_deref(), active)
        }
    };

    Ok(output)
}

fn report(err: &AppError) -> ExitCode {
    eprintln!("error[{}]: {err}", err.error_code());
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}
