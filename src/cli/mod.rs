//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// Banner with ANSI styling for clap help output.
/// Bold "asynclab", dimmed rest. (Static — used for --help only.)
pub const BANNER_STYLED: &str =
    "\x1b[1masynclab\x1b[0m \x1b[2m· asynchronous programming and collection pattern demos\x1b[0m";

/// Print the banner to stderr before a full demo run.
pub fn print_banner() {
    use colored::Colorize;
    use std::io::Write;
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "  {} {}",
        "asynclab".bold(),
        "· asynchronous programming and collection pattern demos".dimmed(),
    );
    let _ = handle.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_banner_does_not_panic() {
        print_banner();
    }

    #[test]
    fn banner_styled_is_non_empty() {
        assert!(!BANNER_STYLED.is_empty());
        assert!(BANNER_STYLED.contains("asynclab"));
    }
}
