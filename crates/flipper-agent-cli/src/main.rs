use anyhow::{Context, Result};
use flipper_agent_config::Config;
use flipper_agent_engine::{markdown, read_image};
use std::{env, fs, io::Read, process};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("render") => cmd_render(args.get(2).map(String::as_str)),
        Some("inspect") => match args.get(2) {
            Some(path) => cmd_inspect(path),
            None => usage(),
        },
        Some("config") => cmd_config(),
        _ => usage(),
    }
}

/// Renders a markdown file (or stdin) to sanitized HTML on stdout.
fn cmd_render(path: Option<&str>) -> Result<()> {
    let source = match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };
    println!("{}", markdown::render_html(&source));
    Ok(())
}

/// Runs the upload ingestor against a local image file.
fn cmd_inspect(path: &str) -> Result<()> {
    let payload = read_image(path)?;
    println!("mime type: {}", payload.mime_type);
    println!("payload:   {} base64 bytes", payload.data.len());
    Ok(())
}

fn cmd_config() -> Result<()> {
    let path = Config::config_path();
    let config = Config::load()?.unwrap_or_default();
    println!("config path:  {}", path.display());
    println!("text model:   {}", config.text_model);
    println!("vision model: {}", config.vision_model);
    match flipper_agent_config::api_key() {
        Some(_) => println!("api key:      present"),
        None => println!(
            "api key:      not set (export {})",
            flipper_agent_config::API_KEY_VAR
        ),
    }
    Ok(())
}

fn usage() -> Result<()> {
    eprintln!("usage: flipper-agent <command>");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  render [FILE]    render markdown from FILE (or stdin) to HTML");
    eprintln!("  inspect <IMAGE>  sniff an image upload and report its payload");
    eprintln!("  config           show the resolved configuration");
    process::exit(2)
}
