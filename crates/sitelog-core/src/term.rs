//! Terminal utilities for colored output.

use colored::*;
use sitelog_types::Method;
use std::io::{self, IsTerminal};

/// Check if stdout is attached to a terminal.
pub fn in_controlling_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Paint a method label in its severity color.
pub fn paint_label(method: Method) -> String {
    let label = method.label();
    match method {
        Method::Error | Method::Assert => label.red().bold().to_string(),
        Method::Warn => label.yellow().bold().to_string(),
        Method::Info => label.cyan().to_string(),
        Method::Dir => label.magenta().to_string(),
        Method::Log => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_label_keeps_text() {
        colored::control::set_override(false);
        for method in Method::ALL {
            assert_eq!(paint_label(method), method.label());
        }
        colored::control::unset_override();
    }
}
