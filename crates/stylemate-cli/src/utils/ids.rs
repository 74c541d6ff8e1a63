//! Id lookup. Tables show shortened ids, so a unique prefix is accepted.

use crate::error::CliError;

/// Find the entry whose id equals `needle`, or starts with it if only one does.
pub fn resolve_id<'a, T>(
    entries: &'a [T],
    needle: &str,
    id_of: impl Fn(&T) -> &str,
    what: &str,
) -> Result<&'a T, CliError> {
    let needle = needle.trim();
    if needle.is_empty() {
        return Err(CliError::Arguments(format!("{what} id cannot be empty")));
    }
    if let Some(exact) = entries.iter().find(|e| id_of(e) == needle) {
        return Ok(exact);
    }

    let mut matches = entries.iter().filter(|e| id_of(e).starts_with(needle));
    match (matches.next(), matches.next()) {
        (Some(only), None) => Ok(only),
        (None, _) => Err(CliError::NotFound(format!("No {what} matches '{needle}'"))),
        (Some(_), Some(_)) => Err(CliError::Arguments(format!(
            "'{needle}' matches several {what}s; give more of the id"
        ))),
    }
}
