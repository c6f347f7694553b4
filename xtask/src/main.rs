use std::env;
use std::path::Path;
use std::process::{Command, ExitCode};

fn run(root: &Path, cmd: &str) -> Result<(), String> {
    let status = Command::new("sh")
        .arg("-lc")
        .arg(cmd)
        .current_dir(root)
        .status()
        .map_err(|e| format!("failed to run `{cmd}`: {e}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("command failed: {cmd}"))
    }
}

fn run_all(root: &Path, cmds: &[&str]) -> Result<(), String> {
    cmds.iter().try_for_each(|cmd| run(root, cmd))
}

const FMT: &str = "cargo fmt --all -- --check";
const CLIPPY: &str = "cargo clippy --workspace --all-targets -- -D warnings";
const TEST: &str = "cargo test --workspace";
const VALIDATE_DATA: &str =
    "cargo run -q -p batterytech-cli -- validate --data-dir crates/batterytech-store/data";

fn main() -> ExitCode {
    let arg = env::args().nth(1).unwrap_or_else(|| "help".to_string());
    let Some(root) = Path::new(env!("CARGO_MANIFEST_DIR")).parent() else {
        eprintln!("xtask must live one level below the workspace root");
        return ExitCode::FAILURE;
    };

    let result = match arg.as_str() {
        "fmt" => run(root, FMT),
        "lint" => run(root, CLIPPY),
        "test" => run(root, TEST),
        "validate-data" => run(root, VALIDATE_DATA),
        "ci" => run_all(root, &[FMT, CLIPPY, TEST, VALIDATE_DATA]),
        "help" | "--help" | "-h" => {
            eprintln!("xtask commands:");
            eprintln!("  fmt            check formatting");
            eprintln!("  lint           clippy with warnings denied");
            eprintln!("  test           workspace tests");
            eprintln!("  validate-data  load and check the content files on disk");
            eprintln!("  ci             all of the above");
            Ok(())
        }
        _ => Err(format!(
            "unknown xtask command: {arg} (try `cargo run -p xtask -- help`)"
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
