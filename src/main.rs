use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use leetcode_profile::export::{self, CsvSections};
use leetcode_profile::{report, AggregateRecord, ClientConfig, LeetCodeClient};
use tokio::runtime::Builder;
use tracing::{error, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

#[derive(Debug, Parser)]
#[command(name = "leetcode-profile")]
#[command(about = "Print a LeetCode user's profile, contest and badge report")]
struct Cli {
    /// Usernames to look up. Prompts for one when omitted.
    usernames: Vec<String>,

    /// Print each record as JSON instead of the text report.
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Print all records as one CSV table instead of the text report.
    #[arg(long)]
    csv: bool,

    /// Column groups to include in the CSV table. All when omitted.
    #[arg(long, value_enum, value_delimiter = ',', requires = "csv")]
    columns: Vec<CsvColumn>,

    /// GraphQL endpoint to query.
    #[arg(long, default_value = "https://leetcode.com/graphql")]
    endpoint: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CsvColumn {
    Profile,
    Stats,
    Contest,
    Badges,
}

#[derive(Debug, Clone, Copy)]
enum Output {
    Text,
    Json,
    Csv(CsvSections),
}

impl Cli {
    fn output(&self) -> Output {
        if self.json {
            return Output::Json;
        }
        if !self.csv {
            return Output::Text;
        }
        if self.columns.is_empty() {
            return Output::Csv(CsvSections::default());
        }
        Output::Csv(CsvSections {
            profile: self.columns.contains(&CsvColumn::Profile),
            stats: self.columns.contains(&CsvColumn::Stats),
            contest: self.columns.contains(&CsvColumn::Contest),
            badges: self.columns.contains(&CsvColumn::Badges),
        })
    }
}

fn prompt_username() -> io::Result<String> {
    print!("Enter LeetCode username: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Look up one user and print its text or JSON report. Records are returned
/// so CSV output can be written once for the whole batch.
async fn lookup(
    client: &LeetCodeClient,
    username: &str,
    output: Output,
) -> Option<AggregateRecord> {
    let result = client.get_user(username).await;
    if let Err(e) = &result {
        info!(username, kind = %e.kind(), "lookup failed");
    }

    match (output, result) {
        (Output::Text, Ok(record)) => {
            print!("{}", report::render_lookup(username, Some(&record)));
            Some(record)
        }
        (Output::Text, Err(e)) => {
            print!("{}", report::render_lookup(username, None));
            println!("{}", e.diagnostic());
            None
        }
        (Output::Json, Ok(record)) => {
            match serde_json::to_string_pretty(&record) {
                Ok(text) => println!("{text}"),
                Err(e) => error!(username, error = %e, "failed to serialize record"),
            }
            Some(record)
        }
        (Output::Csv(_), Ok(record)) => Some(record),
        // json and csv: diagnostics on stderr
        (_, Err(e)) => {
            eprintln!("{}", e.diagnostic());
            None
        }
    }
}

fn main() -> io::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let output = cli.output();

    let usernames = if cli.usernames.is_empty() {
        let username = prompt_username()?;
        if username.is_empty() {
            println!("Please provide a valid username!");
            return Ok(());
        }
        vec![username]
    } else {
        cli.usernames
    };

    let client = LeetCodeClient::with_config(ClientConfig {
        endpoint: cli.endpoint,
        timeout: Duration::from_secs(cli.timeout_secs),
    });

    let runtime = Builder::new_current_thread().enable_all().build()?;
    let records = runtime.block_on(async {
        let mut records = Vec::new();
        for username in &usernames {
            records.extend(lookup(&client, username, output).await);
        }
        records
    });

    if let Output::Csv(sections) = output {
        match export::to_csv(&records, sections) {
            Ok(table) => print!("{table}"),
            Err(e) => error!(error = %e, "failed to write csv"),
        }
    }
    Ok(())
}
