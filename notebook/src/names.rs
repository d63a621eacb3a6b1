//! Payload splitting.

/// Split an event payload into names: one per line, trimmed, blanks dropped.
///
/// A payload with no usable text yields no names.
#[must_use]
pub fn split_names(payload: &str) -> Vec<String> {
    payload
        .split('\n')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_name_passes_through() {
        assert_eq!(split_names("Ryuk"), vec!["Ryuk"]);
    }

    #[test]
    fn multi_line_payload_keeps_order() {
        assert_eq!(split_names("A\nB\nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn segments_are_trimmed_and_blanks_dropped() {
        assert_eq!(split_names("  Misa Amane \r\n\n \nNear\n"), vec!["Misa Amane", "Near"]);
    }

    #[test]
    fn blank_payload_yields_nothing() {
        assert!(split_names("").is_empty());
        assert!(split_names(" \n\t\n").is_empty());
    }

    #[test]
    fn inner_spaces_survive() {
        assert_eq!(split_names("Soichiro Yagami"), vec!["Soichiro Yagami"]);
    }
}
