use super::severity::Severity;

/// Render one directive line.
pub fn format_setting(name: &str, value: &str, severity: Severity) -> String {
    format!("{name} = {value}:{severity}")
}

/// Pick between two outcomes by count; `tie` decides equal counts.
pub(crate) fn dominant<'a>(
    first: (&'a str, u64),
    second: (&'a str, u64),
    tie: &'a str,
) -> &'a str {
    match first.1.cmp(&second.1) {
        std::cmp::Ordering::Greater => first.0,
        std::cmp::Ordering::Less => second.0,
        std::cmp::Ordering::Equal => tie,
    }
}
