use clap::{Parser, Subcommand};
use swift_client::SwiftClient;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod errors;

use commands::account_cmd::handle_stat_command;
use commands::container_cmd::{
    handle_create_container_command, handle_delete_container_command, handle_list_command,
    ListArgs,
};
use commands::object_cmd::{
    handle_delete_object_command, handle_download_command, handle_head_command,
    handle_set_meta_command, handle_upload_command, DownloadArgs, SetMetaArgs, UploadArgs,
};
use config::CliConfig;
use errors::Error;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// swiftctl: work with Swift and CloudFiles object storage accounts
#[derive(Parser)]
#[command(name = "swiftctl")]
#[command(about = "Work with Swift and CloudFiles object storage accounts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show account usage counters
    Stat,

    /// List containers owned by the account
    List(ListArgs),

    /// Create a container
    CreateContainer {
        /// Name of the container to create
        container: String,
    },

    /// Delete a container if it is empty
    DeleteContainer {
        /// Name of the container to delete
        container: String,
    },

    /// Upload a local file as an object
    Upload(UploadArgs),

    /// Download an object to a local file
    Download(DownloadArgs),

    /// Show the attributes and metadata of an object
    Head {
        /// Container holding the object
        container: String,
        /// Object key
        key: String,
    },

    /// Delete an object
    Delete {
        /// Container holding the object
        container: String,
        /// Object key
        key: String,
    },

    /// Replace the user metadata of an object
    SetMeta(SetMetaArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        error!(error = %err, "Command failed");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let session = CliConfig::from_env().resolve_session().await?;
    let client = SwiftClient::new(&session.storage_url, session.token)?;

    match cli.command {
        Commands::Stat => handle_stat_command(&client).await,
        Commands::List(args) => handle_list_command(&client, &args).await,
        Commands::CreateContainer { container } => {
            handle_create_container_command(&client, &container).await
        }
        Commands::DeleteContainer { container } => {
            handle_delete_container_command(&client, &container).await
        }
        Commands::Upload(args) => handle_upload_command(&client, &args).await,
        Commands::Download(args) => handle_download_command(&client, &args).await,
        Commands::Head { container, key } => handle_head_command(&client, &container, &key).await,
        Commands::Delete { container, key } => {
            handle_delete_object_command(&client, &container, &key).await
        }
        Commands::SetMeta(args) => handle_set_meta_command(&client, &args).await,
    }
}
