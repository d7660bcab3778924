use std::fs::read_to_string;
use assert_cmd::Command;
use indoc::indoc;
use predicates::prelude::*;
use tempfile::tempdir;
use crate::common::{build_trace_log_arg, print};

mod common;

#[test]
fn session_starts_with_sample_parts() -> Result<(), anyhow::Error> {
    // given
    let temp_dir = tempdir()?;
    let (_trace_log_path, trace_log_arg) = build_trace_log_arg(&temp_dir);

    // and
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stockroom"));

    // when
    cmd.args([trace_log_arg.as_str()])
        .write_stdin("list\nexit\n")
        // then
        .assert()
        .success()
        .stdout(print("stdout"))
        .stdout(predicate::str::contains("Loaded sample parts. count: 3"))
        .stdout(predicate::str::contains("Parafuso M8"))
        .stdout(predicate::str::contains("Filtro de Óleo"))
        .stdout(predicate::str::contains("Placa de Circuito"))
        .stdout(predicate::str::contains("C5-02"));

    Ok(())
}

#[test]
fn duplicate_code_and_stock_floor() -> Result<(), anyhow::Error> {
    // given
    let temp_dir = tempdir()?;
    let (trace_log_path, trace_log_arg) = build_trace_log_arg(&temp_dir);

    // and
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stockroom"));

    // and
    let input = indoc! {"
        add --name Bolt --code 1001 --quantity 500 --location A1-01
        add --name Bolt --code 1001 --quantity 10 --location A1-02
        stock-out --code 1001 --amount 500
        adjust --code 1001 --direction out --amount 1
        remove --code 1001 --yes
        show --code 1001
        exit
    "};

    // when
    cmd.args([trace_log_arg.as_str(), "--empty"])
        .write_stdin(input)
        // then
        .assert()
        .success()
        .stdout(print("stdout"))
        .stdout(predicate::str::contains("Part added. code: 1001"))
        .stdout(predicate::str::contains("Error: Duplicate part code. code: 1001"))
        .stdout(predicate::str::contains("Stock-out of 500 recorded for 'Bolt'. quantity: 0"))
        .stdout(predicate::str::contains("Error: Insufficient stock. code: 1001, current quantity: 0, change: -1"))
        .stdout(predicate::str::contains("Part removed. code: 1001"))
        .stdout(predicate::str::contains("Error: Part not found. code: 1001"))
        .stdout(predicate::str::contains("Parafuso M8").not());

    // and
    let trace_content = read_to_string(trace_log_path)?;
    println!("{}", trace_content);

    assert!(trace_content.contains("Added part. code: 1001, name: 'Bolt'"));
    assert!(trace_content.contains("Rejected part with duplicate code. code: 1001"));
    assert!(trace_content.contains("Removed part. code: 1001, name: 'Bolt'"));

    Ok(())
}

#[test]
fn removal_requires_confirmation() -> Result<(), anyhow::Error> {
    // given
    let temp_dir = tempdir()?;
    let (_trace_log_path, trace_log_arg) = build_trace_log_arg(&temp_dir);

    // and
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stockroom"));

    // and
    let input = indoc! {"
        remove --code 2005
        no
        show --code 2005
        remove --code 2005
        y
        show --code 2005
    "};

    // when
    cmd.args([trace_log_arg.as_str()])
        .write_stdin(input)
        // then
        .assert()
        .success()
        .stdout(print("stdout"))
        .stdout(predicate::str::contains("Remove part with code 2005? [y/N]"))
        .stdout(predicate::str::contains("Removal cancelled. code: 2005"))
        .stdout(predicate::str::contains("Selected: 2005 'Filtro de Óleo', quantity: 120, location: B3-10"))
        .stdout(predicate::str::contains("Part removed. code: 2005"))
        .stdout(predicate::str::contains("Error: Part not found. code: 2005"));

    Ok(())
}

#[test]
fn invalid_numbers_are_reported() -> Result<(), anyhow::Error> {
    // given
    let temp_dir = tempdir()?;
    let (_trace_log_path, trace_log_arg) = build_trace_log_arg(&temp_dir);

    // and
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stockroom"));

    // and
    let input = indoc! {"
        add --name Washer --code 12x --quantity 5 --location D1
        add --name \"Spring --code 77 --quantity 5 --location D1
        stock-in --code 1001 --amount lots
        stock-in --code 1001 --amount 25
    "};

    // when
    cmd.args([trace_log_arg.as_str()])
        .write_stdin(input)
        // then
        .assert()
        .success()
        .stdout(print("stdout"))
        .stdout(predicate::str::contains("invalid value '12x' for '--code <CODE>'"))
        .stdout(predicate::str::contains("invalid value 'lots' for '--amount <AMOUNT>'"))
        .stdout(predicate::str::contains("Error: Invalid quoting."))
        .stdout(predicate::str::contains("Spring").not())
        .stdout(predicate::str::contains("Stock-in of 25 recorded for 'Parafuso M8'. quantity: 525"))
        .stdout(predicate::str::contains("Washer").not());

    Ok(())
}

#[test]
fn help() {
    // given
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stockroom"));

    // when
    cmd.args(["--help"])
        // then
        .assert()
        .success()
        .stdout(print("stdout"))
        .stdout(predicate::str::contains("Usage: stockroom"))
        .stdout(predicate::str::contains("--empty"));
}
