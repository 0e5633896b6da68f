//! Desktop client launcher for the workspace root package.

fn main() {
    if let Err(err) = codedrop::run_gui() {
        eprintln!("codedrop gui failed: {}", err);
        std::process::exit(1);
    }
}
