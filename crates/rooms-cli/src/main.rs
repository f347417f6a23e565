//! soton-rooms CLI - Command-line room lookups
//!
//! Usage:
//!   rooms lookup <room> [--data-dir <dir>] [--json]
//!   rooms extract <file.ttl> <room> [--json]

use anyhow::Context;
use clap::{Parser, Subcommand};
use rooms_core::{
    extract, AppConfig, LoggingConfig, RoomDirectory, RoomId, RoomReport, TripleSource,
};
use rooms_source::{parse_turtle, FileTripleSource, HttpTripleSource};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rooms")]
#[command(about = "Look up University of Southampton rooms")]
#[command(version)]
struct Cli {
    /// TOML config file (environment variables still take precedence)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a room's document and summarise it
    Lookup {
        /// Room code, e.g. 32-3077
        room: String,
        /// Read `<room>.ttl` documents from this directory instead of HTTP
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarise a room from a local Turtle file
    Extract {
        /// Turtle document
        file: PathBuf,
        /// Room code the document describes
        room: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::from_file(path.clone())?.with_env_override()?,
        None => AppConfig::from_env()?,
    };
    Ok(config)
}

/// Default filter when `RUST_LOG` is unset
fn log_filter(logging: &LoggingConfig) -> String {
    format!(
        "rooms_cli={level},rooms_core={level},rooms_source={level}",
        level = logging.level
    )
}

/// Logs go to stderr; stdout carries the report
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| log_filter(logging).into());

    if logging.json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn render(report: &RoomReport, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.message_text().trim_end().to_string())
    }
}

async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<String> {
    match cli.command {
        Commands::Lookup {
            room,
            data_dir,
            json,
        } => {
            let source: Arc<dyn TripleSource> = match data_dir {
                Some(dir) => Arc::new(FileTripleSource::new(dir)),
                None => Arc::new(HttpTripleSource::from_config(&config.source)?),
            };
            let directory = RoomDirectory::new(source, config.source.id_base.clone());

            let room = RoomId::new(room.trim());
            let report = directory
                .lookup(&room)
                .await
                .with_context(|| format!("Lookup of room {room} failed"))?;
            render(&report, json)
        }
        Commands::Extract { file, room, json } => {
            let data = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let triples = parse_turtle(&data, None)?;

            let subject = RoomId::new(room.trim()).subject_iri(&config.source.id_base);
            tracing::debug!(triples = triples.len(), %subject, "Extracting room attributes");

            let report = RoomReport::from(extract(&triples, &subject));
            render(&report, json)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    init_tracing(&config.logging);

    println!("{}", run(cli, &config).await?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix oo: <http://purl.org/openorg/> .
@prefix soton: <http://id.southampton.ac.uk/ns/> .

<http://id.southampton.ac.uk/room/2-1065> rdfs:label "Seminar Room" ; oo:capacity "30" .
<http://id.southampton.ac.uk/room-feature/loop> a soton:RoomFeatureClass ; rdfs:label "Induction Loop" .
"#;

    #[test]
    fn test_parse_lookup_args() {
        let cli = Cli::try_parse_from(["rooms", "lookup", "32-3077", "--json"]).unwrap();
        match cli.command {
            Commands::Lookup {
                room,
                data_dir,
                json,
            } => {
                assert_eq!(room, "32-3077");
                assert!(data_dir.is_none());
                assert!(json);
            }
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_log_filter_follows_config() {
        let logging = LoggingConfig {
            level: "debug".to_string(),
            json_format: true,
        };
        assert_eq!(
            log_filter(&logging),
            "rooms_cli=debug,rooms_core=debug,rooms_source=debug"
        );
    }

    #[test]
    fn test_config_file_sets_logging() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.toml");
        std::fs::write(&path, "[logging]\nlevel = \"trace\"\njson_format = true\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(
            log_filter(&config.logging),
            "rooms_cli=trace,rooms_core=trace,rooms_source=trace"
        );
        assert!(config.logging.json_format);
    }

    #[test]
    fn test_extract_requires_room() {
        assert!(Cli::try_parse_from(["rooms", "extract", "room.ttl"]).is_err());
    }

    #[tokio::test]
    async fn test_extract_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("room.ttl");
        std::fs::write(&file, DOC).unwrap();

        let cli = Cli::try_parse_from([
            "rooms",
            "extract",
            file.to_str().unwrap(),
            "2-1065",
        ])
        .unwrap();

        assert_eq!(
            run(cli, &AppConfig::default()).await.unwrap(),
            "Room: Seminar Room\nCapacity: 30\nRoom features: Induction Loop"
        );
    }

    #[tokio::test]
    async fn test_lookup_from_data_dir_as_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("2-1065.ttl"), DOC).unwrap();

        let cli = Cli::try_parse_from([
            "rooms",
            "lookup",
            "2-1065",
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--json",
        ])
        .unwrap();

        let output: serde_json::Value = serde_json::from_str(&run(cli, &AppConfig::default()).await.unwrap()).unwrap();
        assert_eq!(output["name"], "Seminar Room");
        assert_eq!(output["capacity"], "30");
        assert_eq!(output["features"][0], "Induction Loop");
    }

    #[tokio::test]
    async fn test_lookup_missing_room_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "rooms",
            "lookup",
            "99-9999",
            "--data-dir",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();

        let err = run(cli, &AppConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("99-9999"));
    }
}
