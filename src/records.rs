/// Extract the hostname from a `[ <index>, '<hostname>' ]` record.
///
/// Returns `None` for any line that does not split into exactly two fields.
pub fn parse_record(line: &str) -> Option<&str> {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);
    let line = line.strip_prefix("[ ").unwrap_or(line);
    let line = line.strip_suffix(" ]").unwrap_or(line);

    let mut fields = line.split(", ");
    let (_index, host) = match (fields.next(), fields.next(), fields.next()) {
        (Some(index), Some(host), None) => (index, host),
        _ => return None,
    };

    Some(host.trim_matches('\''))
}
