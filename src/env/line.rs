//! Splitting `KEY=VALUE` lines.

use super::MalformedKind;

/// How a line containing more than one `=` is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitPolicy {
    /// Exactly one `=` per line. `KEY=a=b` is malformed.
    #[default]
    Strict,
    /// Split at the first `=`; the value keeps any later `=` verbatim.
    FirstSeparator,
}

/// Parses one line into a trimmed key and value.
///
/// Returns `Ok(None)` for blank or whitespace-only lines.
pub fn parse_line(line: &str, policy: SplitPolicy) -> Result<Option<(&str, &str)>, MalformedKind> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (key, value) = line
        .split_once('=')
        .ok_or(MalformedKind::MissingSeparator)?;

    if policy == SplitPolicy::Strict && value.contains('=') {
        return Err(MalformedKind::ExtraSeparator);
    }

    Ok(Some((key.trim(), value.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_pair() {
        assert_eq!(
            parse_line("PORT=8080", SplitPolicy::Strict),
            Ok(Some(("PORT", "8080")))
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(
            parse_line("  HOST =  example.com \t", SplitPolicy::Strict),
            Ok(Some(("HOST", "example.com")))
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(parse_line("", SplitPolicy::Strict), Ok(None));
        assert_eq!(parse_line("   \t", SplitPolicy::FirstSeparator), Ok(None));
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            parse_line("FOO", SplitPolicy::Strict),
            Err(MalformedKind::MissingSeparator)
        );
        assert_eq!(
            parse_line("FOO", SplitPolicy::FirstSeparator),
            Err(MalformedKind::MissingSeparator)
        );
    }

    #[test]
    fn test_extra_separator_depends_on_policy() {
        assert_eq!(
            parse_line("KEY=a=b", SplitPolicy::Strict),
            Err(MalformedKind::ExtraSeparator)
        );
        assert_eq!(
            parse_line("KEY=a=b", SplitPolicy::FirstSeparator),
            Ok(Some(("KEY", "a=b")))
        );
    }

    #[test]
    fn test_empty_value_and_empty_key() {
        assert_eq!(
            parse_line("EMPTY=", SplitPolicy::Strict),
            Ok(Some(("EMPTY", "")))
        );
        assert_eq!(
            parse_line("=value", SplitPolicy::Strict),
            Ok(Some(("", "value")))
        );
    }
}
