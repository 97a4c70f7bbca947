use yansi::Paint;

/// Print an action banner before the action runs.
pub fn print_action(action: &str) {
    println!("{} {}", "::".cyan(), action.blue().bold());
}

/// Print a user-facing progress message.
pub fn echo(message: &str) {
    println!("{}", message);
}

/// Print a user-facing path with a label, e.g. "builddir: /scratch/...".
pub fn print_path(label: &str, path: &std::path::Path) {
    println!("{} {}", format!("{label}:").green(), path.display());
}
