//! Header row aliasing.

use crate::flatten::AliasMap;

/// Substitute display names for headers found in `aliases`.
///
/// Order and length are preserved. Headers without an alias, or whose alias
/// is empty, keep their natural name.
pub fn map_column_names(headers: &[String], aliases: Option<&AliasMap>) -> Vec<String> {
    let Some(aliases) = aliases else {
        return headers.to_vec();
    };

    headers
        .iter()
        .map(|header| match aliases.get(header) {
            Some(alias) if !alias.is_empty() => alias.clone(),
            _ => header.clone(),
        })
        .collect()
}
