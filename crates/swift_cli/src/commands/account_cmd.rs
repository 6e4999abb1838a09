//! Account inspection commands.

use swift_client::ObjectStorageClient;

use crate::errors::Error;

#[cfg(test)]
#[path = "account_cmd_tests.rs"]
mod tests;

/// Prints account usage counters.
pub async fn handle_stat_command(client: &dyn ObjectStorageClient) -> Result<(), Error> {
    let metadata = client.get_account_metadata().await?;

    println!("Containers: {}", metadata.container_count);
    println!("Bytes used: {}", metadata.bytes_used);

    Ok(())
}
