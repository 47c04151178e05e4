use std::fs;
use std::io::Cursor;
use std::path::Path;

use clap::Parser;
use dealership_console::{Args, Outcome, run};
use tempfile::tempdir;

fn args_for(path: &Path, format: &str, extra: &[&str]) -> Args {
    let path = path.to_str().expect("temp path is utf-8");
    let mut argv = vec![
        "dealership",
        "--export-path",
        path,
        "--format",
        format,
        "--fleet-size",
        "5",
    ];
    argv.extend_from_slice(extra);
    Args::parse_from(argv)
}

fn play(args: &Args, script: &str) -> (Outcome, String) {
    let mut output = Vec::new();
    let outcome = run(args, Cursor::new(script.as_bytes().to_vec()), &mut output)
        .expect("session should not fail");
    (outcome, String::from_utf8(output).expect("console output is utf-8"))
}

#[test]
fn purchases_and_returns_end_up_in_the_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("CarTransactions.csv");
    let args = args_for(&path, "csv", &[]);

    // login, buy 2 trucks (units 2 and 4), buy 1 sedan (unit 5), return txn 1, exit
    let script = "login\nadmin\npassword\n\
                  1\n3\n2\nAlice\n2\nBob\n4\n\
                  1\n1\n1\nCara\n5\n\
                  2\n1\n\
                  3\n";
    let (outcome, shown) = play(&args, script);

    assert_eq!(outcome, Outcome::Exported { rows: 2 });
    assert!(shown.contains("Login successful!"));
    assert!(shown.contains("You have selected: Truck"));
    assert!(shown.contains("Available car IDs: 1, 3, 5"));
    assert!(shown.contains("Successfully Returned"));
    assert!(shown.contains("Data written to"));

    let csv = fs::read_to_string(&path).unwrap();
    assert_eq!(
        csv,
        "Transaction ID,Customer Name,Purchased Car ID\n2,Bob,4\n3,Cara,5\n"
    );
}

#[test]
fn returned_ids_are_not_reissued() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    let args = args_for(&path, "csv", &[]);

    let script = "login\njohn\ndoe\n\
                  1\n2\n1\nAlice\n3\n\
                  2\n1\n\
                  1\n2\n1\nBob\n3\n\
                  3\n";
    let (outcome, _) = play(&args, script);

    assert_eq!(outcome, Outcome::Exported { rows: 1 });
    let csv = fs::read_to_string(&path).unwrap();
    assert!(csv.ends_with("\n2,Bob,3\n"));
}

#[test]
fn json_export_after_sign_up() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out").join("ledger.json");
    let args = args_for(&path, "json", &[]);

    let script = "signup\nadmin\nkim\npw\nkim\npw\n1\n4\n1\nDee\n1\n3\n";
    let (outcome, shown) = play(&args, script);

    assert_eq!(outcome, Outcome::Exported { rows: 1 });
    assert!(shown.contains("Username already exists"));
    let json = fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"Customer Name\": \"Dee\""));
}

#[test]
fn failed_login_exports_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never.csv");
    let args = args_for(&path, "csv", &["--auth-attempts", "1"]);

    let (outcome, shown) = play(&args, "login\nadmin\nwrong\n1\n");

    assert_eq!(outcome, Outcome::AuthenticationFailed);
    assert!(shown.contains("Login failed. Please check your username and password."));
    assert!(!path.exists());
}

#[test]
fn exit_from_welcome_screen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never.csv");
    let args = args_for(&path, "csv", &[]);

    let (outcome, _) = play(&args, "exit\n");

    assert_eq!(outcome, Outcome::Exited);
    assert!(!path.exists());
}

#[test]
fn empty_session_still_writes_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    let args = args_for(&path, "csv", &[]);

    let (outcome, _) = play(&args, "login\nadmin\npassword\n3\n");

    assert_eq!(outcome, Outcome::Exported { rows: 0 });
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Transaction ID,Customer Name,Purchased Car ID\n"
    );
}

#[test]
fn xlsx_workbook_is_written_for_the_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("CarTransactions.xlsx");
    let args = args_for(&path, "xlsx", &[]);

    let (outcome, shown) = play(&args, "login\nadmin\npassword\n1\n2\n1\nAlice\n3\n3\n");

    assert_eq!(outcome, Outcome::Exported { rows: 1 });
    assert!(shown.contains("CarTransactions.xlsx successfully."));
    // xlsx is a zip container
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
