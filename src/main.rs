use depsort::cli;
use depsort::core::error::DepsortError;

fn main() {
    if let Err(e) = cli::run() {
        match &e {
            DepsortError::OddLineCount(count) => {
                eprintln!("Error: input has {count} lines; tasks and prerequisites come in pairs");
            }
            DepsortError::InputFile { path, source } => {
                eprintln!("Error: cannot read {}: {source}", path.display());
            }
            _ => {
                eprintln!("Error: {e}");
            }
        }
        std::process::exit(1);
    }
}
