use clap::{Parser, Subcommand};
use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Submit test payloads to a running form relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Relay route on the server.
    #[arg(short, long, default_value = "/contact")]
    path: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a form payload
    Send {
        /// Form field as key=value, sent as a JSON object (repeatable)
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// Send this text verbatim as text/plain instead of JSON fields
        #[arg(long, conflicts_with = "fields")]
        raw: Option<String>,
    },
    /// Check relay liveness
    Health,
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {s:?}"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Send { fields, raw } => {
            let request = client.post(format!("{}{}", base, cli.path));
            let request = match raw {
                Some(text) => request
                    .header(CONTENT_TYPE, "text/plain;charset=utf-8")
                    .body(text),
                None => {
                    let form: Map<String, Value> = fields
                        .into_iter()
                        .map(|(k, v)| (k, Value::String(v)))
                        .collect();
                    request.json(&form)
                }
            };
            print_response(request.send().await?).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", base)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    let rendered = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if status.is_success() {
        println!("{}", rendered);
    } else {
        eprintln!("Error: relay returned status {}", status);
        eprintln!("Response: {}", rendered);
    }
    Ok(())
}
