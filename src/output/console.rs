//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    println!("{}", style("bootleg").cyan().bold());
}

/// Print the end-of-run summary.
pub fn print_run_summary(completed: usize, failed: usize, unresolved: usize) {
    println!();
    println!("{}", style("Run complete:").bold());
    println!("  Downloaded: {}", completed);
    if failed > 0 {
        println!("  Failed: {}", style(failed).red());
    }
    if unresolved > 0 {
        println!("  Unresolved URLs: {}", style(unresolved).yellow());
    }
}
