use clap::{Parser, Subcommand};
use langfmt::{infer_locale, plural_category, plural_form, test_interval};
use langfmt_cli::{
    FormatRequest, MessageSource, load_catalog, parse_replacement, render, resolve_locale,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the plural form index and category for a count.
    Plural {
        /// The count to classify
        #[arg(allow_negative_numbers = true)]
        count: i64,

        /// Locale code (defaults to the environment locale, then `en`)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Test whether a count belongs to an interval such as `[1,5[` or `{0}`.
    Interval {
        /// The interval expression
        interval: String,

        /// The count to test
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },

    /// Render a message with plural selection and placeholder replacement.
    Format {
        /// Message template given inline
        #[arg(short, long, conflicts_with = "catalog")]
        message: Option<String>,

        /// JSON catalog file to read the message from
        #[arg(short, long, requires = "key")]
        catalog: Option<String>,

        /// Dotted key of the message inside the catalog
        #[arg(short, long, requires = "catalog")]
        key: Option<String>,

        /// Count used to pick the plural variant
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Locale code (defaults to the environment locale, then `en`)
        #[arg(short, long)]
        locale: Option<String>,

        /// Placeholder replacement, repeatable: --set name=value
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_replacement)]
        replacements: Vec<(String, String)>,
    },

    /// Flatten a nested JSON catalog into dotted keys.
    Flatten {
        /// The catalog file
        input: String,
    },

    /// Print the locale inferred from the environment.
    Locale,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(commands: Commands) -> Result<(), String> {
    match commands {
        Commands::Plural { count, locale } => {
            let locale = resolve_locale(locale.as_deref())?;
            println!(
                "{} {}",
                plural_form(count, &locale),
                plural_category(count, &locale)
            );
        }
        Commands::Interval { interval, count } => {
            let matched = test_interval(count, &interval).map_err(|e| e.to_string())?;
            println!("{}", matched);
        }
        Commands::Format {
            message,
            catalog,
            key,
            count,
            locale,
            replacements,
        } => {
            let source = match (message, catalog, key) {
                (Some(message), _, _) => MessageSource::Inline(message),
                (None, Some(path), Some(key)) => MessageSource::Catalog { path, key },
                _ => return Err("Either --message or --catalog with --key is required".into()),
            };
            let request = FormatRequest {
                source,
                count,
                locale: resolve_locale(locale.as_deref())?,
                replacements,
            };
            tracing::debug!(?request, "rendering message");
            println!("{}", render(&request)?);
        }
        Commands::Flatten { input } => {
            let catalog = load_catalog(&input)?;
            let json = serde_json::to_string_pretty(&catalog)
                .map_err(|e| format!("Error serializing to JSON: {}", e))?;
            println!("{}", json);
        }
        Commands::Locale => match infer_locale() {
            Some(locale) => println!("{}", locale),
            None => return Err("No locale found in LC_ALL, LC_MESSAGES or LANG".into()),
        },
    }
    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args.commands) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
