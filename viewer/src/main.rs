use std::io::{self, Stdout};

use clap::{Parser, Subcommand};
use notebook::driver;
use notebook::scheduler::{Scheduler, SchedulerConfig};
use tracing::info;
use viewer::render::Output;
use viewer::{ViewerError, client, demo};

#[derive(Parser, Debug)]
#[command(name = "notebook-viewer", about = "Terminal viewer for the subscriber notebook")]
struct Cli {
    #[arg(long, env = "NOTEBOOK_RELAY_URL", default_value = "ws://127.0.0.1:5000/socket")]
    relay_url: String,

    #[arg(long, env = "NOTEBOOK_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// Print every render action as a JSON line.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Follow the relay and write every new subscriber (default).
    Watch,
    /// Write random names offline.
    Demo {
        #[arg(long, default_value_t = demo::DEFAULT_DEMO_COUNT)]
        count: usize,
    },
    /// Send a test subscriber through the relay.
    Send { username: String },
}

#[tokio::main]
async fn main() -> Result<(), ViewerError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let output = Output::new(io::stdout(), cli.json);

    match cli.command.unwrap_or(Command::Watch) {
        Command::Watch => run_watch(&cli.relay_url, output).await,
        Command::Demo { count } => run_demo(count, output).await,
        Command::Send { username } => run_send(&cli.base_url, &username).await,
    }
}

async fn run_watch(relay_url: &str, output: Output<Stdout>) -> Result<(), ViewerError> {
    let (handle, task) = driver::spawn(Scheduler::new(SchedulerConfig::from_env()), output);
    let watched = client::watch(relay_url, &handle).await;
    drop(handle);

    let (scheduler, mut output) = task.await?;
    output.summary(scheduler.notebook())?;
    let received = watched?;
    info!(received, stats = ?scheduler.stats(), "viewer: done");
    Ok(())
}

async fn run_demo(count: usize, output: Output<Stdout>) -> Result<(), ViewerError> {
    let payload = demo::demo_payload(count, &mut rand::rng());
    let (handle, task) = driver::spawn(Scheduler::new(SchedulerConfig::from_env()), output);
    handle.push(payload)?;
    drop(handle);

    let (scheduler, mut output) = task.await?;
    output.summary(scheduler.notebook())?;
    info!(count, stats = ?scheduler.stats(), "viewer: demo finished");
    Ok(())
}

async fn run_send(base_url: &str, username: &str) -> Result<(), ViewerError> {
    let reply = client::send(base_url, username).await?;
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}
