//! Headless driver: seeds a workspace, sends each argument as a chat prompt
//! and prints the resulting transcript as JSON.

use std::io;

use agentic_workspace::kernel::services::adapters::load_settings;
use agentic_workspace::kernel::services::ports::Settings;
use agentic_workspace::kernel::services::WorkspaceHost;
use agentic_workspace::kernel::Store;
use agentic_workspace::models::ChatDraft;

mod logging;

fn main() -> io::Result<()> {
    let (settings, settings_error) = match load_settings() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    let logging = logging::init(&settings.log_filter);
    if let Some(guard) = &logging {
        eprintln!("logs: {}", guard.log_dir().display());
    }
    if let Some(e) = settings_error {
        tracing::warn!(error = %e, "failed to load settings, using defaults");
    }

    let prompts: Vec<String> = std::env::args().skip(1).collect();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .or_else(|e| {
            tracing::error!(
                error = %e,
                "Failed to create multi-thread tokio runtime, falling back to current-thread"
            );
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
        })?;

    runtime.block_on(run(settings, prompts))
}

async fn run(settings: Settings, prompts: Vec<String>) -> io::Result<()> {
    let handle = WorkspaceHost::spawn(Store::seeded(settings));
    handle.open_file("README.md").await.map_err(io::Error::other)?;

    for prompt in prompts {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            continue;
        }
        handle
            .push_chat_message(ChatDraft::user(prompt))
            .await
            .map_err(io::Error::other)?;
    }

    let snapshot = handle.snapshot();
    let json = serde_json::to_string_pretty(&snapshot.chat).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}
