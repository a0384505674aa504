use assert_cmd::prelude::*;
use std::process::Command;

fn stdout_of(cmd: &mut Command) -> Result<(Option<i32>, String), Box<dyn std::error::Error>> {
    let output = cmd.output()?;
    Ok((output.status.code(), String::from_utf8(output.stdout)?))
}

#[test]
fn route_in_default_network() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("transitroute")?;
    cmd.arg("--from").arg("Bank").arg("--to").arg("Aldgate East");

    let (code, stdout) = stdout_of(&mut cmd)?;
    assert_eq!(Some(0), code);
    assert!(stdout.contains(
        "Start station: Bank\nDestination station: Aldgate East\nTime: 4\nRoute:\nBank->Tower Hill->Aldgate East\n"
    ));
    Ok(())
}

#[test]
fn show_examples() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("transitroute")?;
    cmd.arg("--examples");

    let (code, stdout) = stdout_of(&mut cmd)?;
    assert_eq!(Some(0), code);
    assert!(stdout.contains("Example 4:"));
    assert!(stdout.contains("Paddington->Baker Street->Bond Street->Oxford Circus"));
    assert!(stdout.contains("Elephant and Castle->London Bridge->Bank"));
    assert!(stdout.contains("Baker Street->Bond Street->Oxford Circus->Warren Street"));
    Ok(())
}

#[test]
fn route_in_graph_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("transitroute")?;
    cmd.arg("tests/data/triangle.toml")
        .arg("-f")
        .arg("North End")
        .arg("-t")
        .arg("South End");

    let (code, stdout) = stdout_of(&mut cmd)?;
    assert_eq!(Some(0), code);
    assert!(stdout.contains("Time: 7\n"));
    assert!(stdout.contains("North End->Central->South End\n"));
    Ok(())
}

#[test]
fn all_routes_table() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("transitroute")?;
    cmd.arg("tests/data/triangle.toml").arg("--all").arg("Central");

    let (code, stdout) = stdout_of(&mut cmd)?;
    assert_eq!(Some(0), code);
    assert!(stdout.contains("Central->North End"));
    assert!(stdout.contains("Central->South End"));
    Ok(())
}

#[test]
fn invalid_graph_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("transitroute")?;
    cmd.arg("tests/data/missing_reverse.toml")
        .arg("--from")
        .arg("A")
        .arg("--to")
        .arg("B");

    let (code, stdout) = stdout_of(&mut cmd)?;
    assert_eq!(Some(1), code);
    assert!(stdout.contains("edge A -> B has no reciprocal edge B -> A"));
    assert!(!stdout.contains("Time:"));
    Ok(())
}

#[test]
fn unknown_station() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("transitroute")?;
    cmd.arg("--from").arg("Hogwarts").arg("--to").arg("Bank");

    let (code, stdout) = stdout_of(&mut cmd)?;
    assert_eq!(Some(2), code);
    assert!(stdout.contains("station 'Hogwarts' does not exist"));
    Ok(())
}

#[test]
fn missing_graph_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("transitroute")?;
    cmd.arg("tests/data/does-not-exist.toml").arg("--examples");

    let (code, stdout) = stdout_of(&mut cmd)?;
    assert_eq!(Some(1), code);
    assert!(stdout.contains("could not read graph from file"));
    Ok(())
}
