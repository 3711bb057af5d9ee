//! Arbor operator CLI: save/load canvas layouts against a running module
//! store, plus a scripted demo drive of the canvas core.

use std::path::PathBuf;

use canvas::engine::CanvasEngine;
use canvas::input::{CanvasOrigin, PointerEvent};
use canvas::module::{ModuleDescriptor, ModuleRecord};
use canvas::registry::ComponentRegistry;
use clap::{Parser, Subcommand};
use client::{PersistError, SaveClient};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read layout file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("invalid layout JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("placement failed: {0}")]
    Place(#[from] canvas::place::PlaceError),
    #[error("resize failed: {0}")]
    Resize(#[from] canvas::resize::ResizeError),
}

#[derive(Parser, Debug)]
#[command(name = "arbor-cli", about = "Arbor canvas layout CLI")]
struct Cli {
    #[arg(long, env = "ARBOR_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Caller identity sent as X-User-Id. A fresh uuid when omitted.
    #[arg(long, env = "ARBOR_USER_ID")]
    user_id: Option<Uuid>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Post a layout file (JSON array of module records) to the store.
    Save { file: PathBuf },
    /// Fetch and print the caller's stored layout.
    Load,
    /// Drop two modules, resize one, and save the result.
    Demo,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let user_id = cli.user_id.unwrap_or_else(Uuid::new_v4);
    let save_client = SaveClient::new(&cli.base_url, user_id)?;

    match cli.command {
        Command::Save { file } => {
            let raw = std::fs::read_to_string(file)?;
            let modules: Vec<ModuleRecord> = serde_json::from_str(&raw)?;
            let ack = save_client.save(&modules).await?;
            println!("saved {} modules as {user_id} ({})", modules.len(), ack.status);
        }
        Command::Load => {
            let modules = save_client.load().await?;
            println!("{}", serde_json::to_string_pretty(&modules)?);
        }
        Command::Demo => {
            let modules = build_demo_layout()?;
            let ack = save_client.save(&modules).await?;
            println!("saved demo layout ({} modules) as {user_id} ({})", modules.len(), ack.status);
        }
    }
    Ok(())
}

/// Drive the canvas core through a drop → resize → snapshot flow.
fn build_demo_layout() -> Result<Vec<ModuleRecord>, CliError> {
    let mut engine = CanvasEngine::new(ComponentRegistry::with_builtins(), CanvasOrigin::new(50.0, 20.0));

    let image = engine.drop_module(
        &ModuleDescriptor::new("ImageModule").with_data("src", "/img/arbor.png"),
        PointerEvent::new(150.0, 220.0),
    )?;
    engine.drop_module(
        &ModuleDescriptor::new("TextModule").with_data("data", "hello canvas"),
        PointerEvent::new(400.0, 320.0),
    )?;

    engine.begin_resize(&image, PointerEvent::new(300.0, 300.0))?;
    engine.on_pointer_move(PointerEvent::new(340.0, 280.0));
    engine.end_resize();

    Ok(engine.modules().to_vec())
}
