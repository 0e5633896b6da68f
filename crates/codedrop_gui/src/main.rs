//! Desktop client binary entry point.

fn main() {
    let exit_code = run_and_report(codedrop_gui::run);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run_and_report<F, E>(runner: F) -> i32
where
    F: FnOnce() -> Result<(), E>,
    E: std::fmt::Display,
{
    match runner() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("codedrop error: {}", err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::run_and_report;

    #[test]
    fn successful_run_exits_zero() {
        assert_eq!(run_and_report(|| Ok::<(), String>(())), 0);
    }

    #[test]
    fn failed_run_exits_non_zero() {
        assert_eq!(run_and_report(|| Err::<(), _>("window creation failed")), 1);
    }
}
