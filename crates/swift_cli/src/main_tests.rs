use super::*;
use clap::CommandFactory;

#[test]
fn test_cli_structure_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_upload_with_metadata() {
    let cli = Cli::try_parse_from([
        "swiftctl",
        "upload",
        "backups",
        "notes.txt",
        "/tmp/notes.txt",
        "--content-type",
        "text/plain",
        "--meta",
        "color=blue",
        "--meta",
        "origin=cli",
    ])
    .unwrap();

    match cli.command {
        Commands::Upload(args) => {
            assert_eq!(args.container, "backups");
            assert_eq!(args.key, "notes.txt");
            assert_eq!(args.content_type.as_deref(), Some("text/plain"));
            assert_eq!(args.metadata.len(), 2);
        }
        _ => panic!("expected upload command"),
    }
}

#[test]
fn test_parse_list_with_paging() {
    let cli = Cli::try_parse_from(["swiftctl", "list", "--limit", "5", "--marker", "backups"])
        .unwrap();

    match cli.command {
        Commands::List(args) => {
            assert_eq!(args.limit, Some(5));
            assert_eq!(args.marker.as_deref(), Some("backups"));
        }
        _ => panic!("expected list command"),
    }
}

#[test]
fn test_set_meta_requires_at_least_one_entry() {
    let result = Cli::try_parse_from(["swiftctl", "set-meta", "backups", "notes.txt"]);

    assert!(result.is_err());
}
