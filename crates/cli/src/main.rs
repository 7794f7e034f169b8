use clap::Parser;
use colored::{control::set_override, Colorize};
use eventdate_core::{parse_reference, EventDateParser, ParsedDate};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

const LONG_ABOUT: &str = r#"
Eventdate extracts normalized, timezoned dates from the messy free-text
strings venue websites use to announce events.

Each candidate string runs through an ordered recognizer cascade
(most precise grammar first) and the matches are ranked by confidence:

  ISO Format        2024-02-20T19:30:00-06:00, 2024-02-20
  US numeric date   2/20/2024, 02-20-24 7:30 PM
  Month-name date   February 20, 2024 / Feb 20 2024 at 7pm
  Today/Tonight     today at 7pm, tonight
  Tomorrow          tomorrow, tomorrow at 2pm
  Weekday relative  this friday, next friday, sat 7pm
  Bare time         7:30 PM (resolved on the reference day)

EXAMPLES:
  evd "this friday"                       Resolve against local now
  evd -r 2024-01-15T12:00:00-06:00 \
      "this friday" "2024-02-20T19:30:00-06:00"
                                          Rank several candidates
  evd --best "friday 8pm" "2/20/2024"     Print only the winner
  evd --json "tonight" | jq .             Machine-readable output

OUTPUT:
  One line per surviving candidate, highest confidence first. All-day
  results print the date only; timed results print the full RFC 3339
  instant. Exit status is 1 when nothing parses.

Relative phrases resolve strictly against --reference, so the same
invocation is reproducible; the default is the current local time."#;

#[derive(Parser)]
#[command(name = "evd")]
#[command(version)]
#[command(about = "Extract normalized event dates from scraped free text")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    /// Candidate strings to parse (a scraped page often yields several
    /// per event)
    #[arg(required_unless_present = "recognizers")]
    texts: Vec<String>,

    /// Reference instant (RFC 3339) that relative phrases resolve
    /// against; defaults to the current local time
    #[arg(short, long)]
    reference: Option<String>,

    /// Print only the single best (highest-confidence) result
    #[arg(short, long)]
    best: bool,

    /// Output results as JSON
    #[arg(short, long)]
    json: bool,

    /// Drop results below this confidence (acceptance policy belongs to
    /// the caller, so the default keeps everything)
    #[arg(short, long, default_value_t = 0.0)]
    threshold: f32,

    /// List the recognizers in cascade order and exit
    #[arg(long)]
    recognizers: bool,

    /// Disable colored output
    #[arg(short = 'C', long)]
    no_color: bool,

    /// Increase verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    // NO_COLOR env var is also respected (https://no-color.org/)
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        set_override(false);
    }

    // Initialize tracing based on verbosity level
    let level = match cli.verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let parser = EventDateParser::new();

    if cli.recognizers {
        print_recognizers(&parser);
        return;
    }

    let reference = match &cli.reference {
        Some(s) => match parse_reference(s) {
            Ok(reference) => reference,
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                std::process::exit(2);
            }
        },
        None => chrono::Local::now().fixed_offset(),
    };
    tracing::debug!(reference = %reference.to_rfc3339(), "resolving against");

    let mut results = parser.parse_many(&cli.texts, reference);
    results.retain(|r| r.confidence >= cli.threshold);
    if cli.best {
        results.truncate(1);
    }

    if cli.json {
        match serde_json::to_string_pretty(&results) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                std::process::exit(2);
            }
        }
        if results.is_empty() {
            std::process::exit(1);
        }
        return;
    }

    if results.is_empty() {
        eprintln!("{}: no candidate parsed as a date", "no match".yellow());
        std::process::exit(1);
    }

    for parsed in &results {
        print_result(parsed);
    }
}

fn print_result(parsed: &ParsedDate) {
    let when = if parsed.all_day {
        format!("{} (all day)", parsed.when.format("%Y-%m-%d"))
    } else {
        parsed.when.to_rfc3339()
    };
    // Pad before coloring so ANSI codes don't break the columns.
    println!(
        "{} {} {}",
        format!("{:>4.0}%", f64::from(parsed.confidence) * 100.0).cyan(),
        format!("{:<18}", parsed.source).bold(),
        when.green()
    );
}

fn print_recognizers(parser: &EventDateParser) {
    println!("{}", "Recognizers, in cascade order:".bold());
    for info in parser.recognizer_infos() {
        println!(
            "  {:<12} {:<18} {}",
            info.id, info.name, info.description
        );
        if !info.examples.is_empty() {
            println!("               e.g. {}", info.examples.join(", ").dimmed());
        }
    }
}
