//! Object commands: upload, download, metadata and deletion.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use swift_client::{ObjectPayload, ObjectStorageClient};

use crate::errors::Error;

#[cfg(test)]
#[path = "object_cmd_tests.rs"]
mod tests;

/// Arguments for the `upload` command.
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Target container
    pub container: String,

    /// Object key; may contain `/` to form pseudo-directories
    pub key: String,

    /// Local file to upload
    pub file: PathBuf,

    /// MIME type to record for the object
    #[arg(long)]
    pub content_type: Option<String>,

    /// User metadata entry, as key=value; repeatable
    #[arg(long = "meta", value_parser = parse_key_value)]
    pub metadata: Vec<(String, String)>,
}

/// Arguments for the `download` command.
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Source container
    pub container: String,

    /// Object key
    pub key: String,

    /// Local file to write the object content to
    pub output: PathBuf,
}

/// Arguments for the `set-meta` command.
#[derive(Args, Debug)]
pub struct SetMetaArgs {
    /// Target container
    pub container: String,

    /// Object key
    pub key: String,

    /// Replacement metadata entries, as key=value
    #[arg(value_parser = parse_key_value, required = true)]
    pub metadata: Vec<(String, String)>,
}

fn parse_key_value(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{value}'"))
}

/// Uploads a local file as an object and prints the service ETag.
pub async fn handle_upload_command(
    client: &dyn ObjectStorageClient,
    args: &UploadArgs,
) -> Result<(), Error> {
    let body = fs::read(&args.file).map_err(Error::LoadFile)?;

    let mut payload = ObjectPayload::new(args.key.clone(), body);
    payload.content_type = args.content_type.clone();
    payload.metadata = args.metadata.iter().cloned().collect();

    let etag = client.put_object(&args.container, &payload).await?;
    println!("Uploaded '{}' (etag {etag})", args.key);

    Ok(())
}

/// Downloads an object to a local file.
pub async fn handle_download_command(
    client: &dyn ObjectStorageClient,
    args: &DownloadArgs,
) -> Result<(), Error> {
    match client.get_object(&args.container, &args.key).await? {
        Some(object) => {
            fs::write(&args.output, &object.body).map_err(Error::SaveFile)?;
            println!(
                "Downloaded '{}' ({} bytes) to {}",
                args.key,
                object.body.len(),
                args.output.display()
            );
        }
        None => println!("Object '{}' not found", args.key),
    }

    Ok(())
}

/// Prints the attributes and user metadata of an object.
pub async fn handle_head_command(
    client: &dyn ObjectStorageClient,
    container: &str,
    key: &str,
) -> Result<(), Error> {
    match client.head_object(container, key).await? {
        Some(metadata) => {
            if let Some(length) = metadata.content_length {
                println!("Content-Length: {length}");
            }
            if let Some(content_type) = &metadata.content_type {
                println!("Content-Type: {content_type}");
            }
            if let Some(etag) = &metadata.etag {
                println!("ETag: {etag}");
            }
            if let Some(last_modified) = metadata.last_modified {
                println!("Last-Modified: {last_modified}");
            }
            for (name, value) in &metadata.metadata {
                println!("Meta {name}: {value}");
            }
        }
        None => println!("Object '{key}' not found"),
    }

    Ok(())
}

/// Deletes an object, reporting whether it existed.
pub async fn handle_delete_object_command(
    client: &dyn ObjectStorageClient,
    container: &str,
    key: &str,
) -> Result<(), Error> {
    if client.delete_object(container, key).await? {
        println!("Deleted '{key}'");
    } else {
        println!("Object '{key}' was already gone");
    }

    Ok(())
}

/// Replaces the user metadata of an object.
pub async fn handle_set_meta_command(
    client: &dyn ObjectStorageClient,
    args: &SetMetaArgs,
) -> Result<(), Error> {
    let metadata = args.metadata.iter().cloned().collect();

    if client
        .set_object_metadata(&args.container, &args.key, &metadata)
        .await?
    {
        println!("Metadata updated for '{}'", args.key);
    } else {
        println!("Metadata update for '{}' was not acknowledged", args.key);
    }

    Ok(())
}
