#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! CLI for inspecting inferred mail connection settings (no network I/O)

use clap::{Args as ClapArgs, Parser, Subcommand};
use mail_session::{
    Encryption, MailConfig, MailerSettings, Protocol, ResolvedProperties, resolve_receive,
    resolve_send,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mail-resolve")]
#[command(about = "Show the connection settings inferred for a mail server")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Mark resolved sessions as debug-enabled
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve settings for sending (SMTP)
    Send(Endpoint),

    /// Resolve settings for receiving (POP3 / IMAP)
    Receive(Endpoint),
}

#[derive(ClapArgs)]
struct Endpoint {
    /// Server host; read from `<PREFIX>_*` variables when omitted
    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    /// smtp, pop3 or imap
    #[arg(long, value_parser = parse_protocol)]
    protocol: Option<Protocol>,

    /// none, tls (STARTTLS) or ssl
    #[arg(long, value_parser = parse_encryption)]
    encryption: Option<Encryption>,

    #[arg(long)]
    username: Option<String>,

    /// Environment variable prefix used when --host is omitted
    #[arg(long, default_value = "MAIL")]
    env_prefix: String,
}

fn parse_protocol(s: &str) -> Result<Protocol, String> {
    s.parse().map_err(|e: mail_session::Error| e.to_string())
}

fn parse_encryption(s: &str) -> Result<Encryption, String> {
    s.parse().map_err(|e: mail_session::Error| e.to_string())
}

impl Endpoint {
    /// Command-line values override whatever the environment provides.
    fn config(&self) -> anyhow::Result<MailConfig> {
        let mut config = match &self.host {
            Some(host) => MailConfig::new(host.clone()),
            None => MailConfig::from_env(&self.env_prefix)?,
        };
        if self.port.is_some() {
            config.port = self.port;
        }
        if self.protocol.is_some() {
            config.protocol = self.protocol;
        }
        if self.encryption.is_some() {
            config.encryption = self.encryption;
        }
        if self.username.is_some() {
            config.username.clone_from(&self.username);
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = MailerSettings::new().with_debug(args.debug);

    let resolved = match &args.command {
        Command::Send(endpoint) => resolve_send(&endpoint.config()?, &settings)?,
        Command::Receive(endpoint) => resolve_receive(&endpoint.config()?, &settings)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        print_resolved(&resolved);
    }

    Ok(())
}

fn print_resolved(resolved: &ResolvedProperties) {
    println!("Protocol:   {}", resolved.protocol());
    println!("Host:       {}", resolved.host());
    println!("Port:       {}", resolved.port());
    println!("Encryption: {}", resolved.encryption());
    println!(
        "Auth:       {}",
        if resolved.is_authenticated() { "yes" } else { "no" }
    );

    println!("\n--- Properties ---\n");
    let width = resolved
        .properties()
        .iter()
        .map(|(k, _)| k.len())
        .max()
        .unwrap_or(0);
    for (key, value) in resolved.properties().iter() {
        println!("{key:<width$}  {value}");
    }
}
