fn is_marker_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

/// Removes a leading step number or bullet (`1.`, `3 .`, `-`) and
/// trims the rest.
///
/// The marker has to start at column zero. Any leading run of digits is
/// taken, so "350 degrees" loses its number.
pub fn strip_step_marker(line: &str) -> &str {
    let marker_end = line
        .find(|c: char| !is_marker_char(c))
        .unwrap_or(line.len());

    if marker_end == 0 {
        return line.trim();
    }

    let rest = line[marker_end..].trim_start();
    rest.strip_prefix('.').unwrap_or(rest).trim()
}

/// One instruction step, or `None` when nothing is left after the marker.
pub fn parse_instruction_line(line: &str) -> Option<String> {
    let step = strip_step_marker(line);
    (!step.is_empty()).then(|| step.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_numbering() {
        assert_eq!(strip_step_marker("1. Preheat oven"), "Preheat oven");
        assert_eq!(strip_step_marker("12.Stir"), "Stir");
        assert_eq!(strip_step_marker("3 . Serve"), "Serve");
    }

    #[test]
    fn test_strips_dash_bullet() {
        assert_eq!(strip_step_marker("- Mix well"), "Mix well");
        assert_eq!(strip_step_marker("-- Rest"), "Rest");
    }

    #[test]
    fn test_keeps_unmarked_line() {
        assert_eq!(strip_step_marker("Boil water  "), "Boil water");
        assert_eq!(strip_step_marker("* Whisk"), "* Whisk");
    }

    #[test]
    fn test_indented_marker_is_kept() {
        assert_eq!(strip_step_marker("  1. Chop"), "1. Chop");
    }

    #[test]
    fn test_leading_number_is_eaten() {
        assert_eq!(strip_step_marker("350 degrees for an hour"), "degrees for an hour");
    }

    #[test]
    fn test_marker_only_yields_nothing() {
        assert_eq!(parse_instruction_line("2."), None);
        assert_eq!(parse_instruction_line("3 . "), None);
        assert_eq!(parse_instruction_line("-"), None);
    }

    #[test]
    fn test_parse_instruction_line() {
        assert_eq!(
            parse_instruction_line("1. Boil broth"),
            Some("Boil broth".to_string())
        );
    }
}
