use std::path::PathBuf;
use predicates::function::FnPredicate;
use predicates::prelude::predicate;
use tempfile::TempDir;

/// Prints the content being checked, so a failing test shows the whole session.
pub fn print(message: &str) -> FnPredicate<fn(&str) -> bool, str> {
    println!("{}:", message);
    predicate::function(|content| {
        println!("{}", content);
        true
    })
}

pub fn build_trace_log_arg(temp_dir: &TempDir) -> (PathBuf, String) {
    let mut path_buf = temp_dir.path().to_path_buf();
    path_buf.push("trace.log");

    let arg = format!("--trace={}", path_buf.to_str().unwrap());

    (path_buf, arg)
}
