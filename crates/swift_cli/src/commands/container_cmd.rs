//! Container commands: listing, creation and deletion.

use clap::Args;
use swift_client::{ListContainerOptions, ObjectStorageClient};

use crate::errors::Error;

#[cfg(test)]
#[path = "container_cmd_tests.rs"]
mod tests;

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Maximum number of containers to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Return containers sorting after this name
    #[arg(long)]
    pub marker: Option<String>,

    /// Return only containers whose name starts with this prefix
    #[arg(long)]
    pub prefix: Option<String>,
}

impl ListArgs {
    fn to_options(&self) -> ListContainerOptions {
        ListContainerOptions {
            limit: self.limit,
            marker: self.marker.clone(),
            prefix: self.prefix.clone(),
        }
    }
}

/// Lists containers owned by the account, one per line.
pub async fn handle_list_command(
    client: &dyn ObjectStorageClient,
    args: &ListArgs,
) -> Result<(), Error> {
    let listing = client.list_containers(&args.to_options()).await?;

    for entry in &listing {
        println!("{:>10} {:>14}  {}", entry.count, entry.bytes, entry.name);
    }

    Ok(())
}

/// Creates a container, reporting whether the service accepted it.
pub async fn handle_create_container_command(
    client: &dyn ObjectStorageClient,
    container: &str,
) -> Result<(), Error> {
    if client.create_container(container).await? {
        println!("Created container '{container}'");
    } else {
        println!("Container '{container}' was not created");
    }

    Ok(())
}

/// Deletes a container if it is empty.
pub async fn handle_delete_container_command(
    client: &dyn ObjectStorageClient,
    container: &str,
) -> Result<(), Error> {
    if client.delete_container_if_empty(container).await? {
        println!("Deleted container '{container}'");
    } else {
        println!("Container '{container}' was not deleted (missing or not empty)");
    }

    Ok(())
}
