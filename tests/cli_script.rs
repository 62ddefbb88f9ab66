use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use regex::Regex;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rent_wizard_cli").unwrap();
    cmd.env("RENT_WIZARD_CLI_SCRIPT", "1")
        .env("RENT_WIZARD_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_creates_a_listing() {
    let home = TempDir::new().unwrap();
    let input = "category Beach
next
location US
next
guests 4
rooms +
next
image https://example.com/harbor.jpg
next
title \"Harbor loft\"
description \"Bright loft next to the ferry.\"
next
price 180
next
exit
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Step 6 of 6: Price"))
        .stdout(contains("Actions: [Back] [Create]"))
        .stdout(contains("Listing Created!"));

    let name_pattern = Regex::new(
        r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}\.json$",
    )
    .unwrap();
    let listings: Vec<_> = std::fs::read_dir(home.path().join("listings"))
        .unwrap()
        .map(|entry| entry.unwrap())
        .collect();
    assert_eq!(listings.len(), 1);
    let file_name = listings[0].file_name().into_string().unwrap();
    assert!(name_pattern.is_match(&file_name), "unexpected file {file_name}");

    let json = std::fs::read_to_string(listings[0].path()).unwrap();
    assert!(json.contains("\"guestCount\": 4"));
    assert!(json.contains("\"roomCount\": 2"));
    assert!(json.contains("\"locationValue\": \"US\""));
    assert!(json.contains("\"title\": \"Harbor loft\""));
}

#[test]
fn script_mode_refuses_incomplete_listing() {
    let home = TempDir::new().unwrap();
    let input = "next\nnext\nnext\nnext\nnext\nnext\nexit\n";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("WARNING: Category: Pick a category"))
        .stdout(contains("Listing Created!").not());

    let stored = std::fs::read_dir(home.path().join("listings")).unwrap().count();
    assert_eq!(stored, 0);
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("nxt\nexit\n")
        .assert()
        .success()
        .stdout(contains("Did you mean `next`?"));
}

#[test]
fn close_discards_the_listing() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("category Farms\nnext\nclose\nnext\nexit\n")
        .assert()
        .success()
        .stdout(contains("Listing discarded."))
        .stdout(contains("The wizard is closed. Type `open` first."));
}
