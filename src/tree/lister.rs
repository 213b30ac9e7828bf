//! Reading, filtering and ordering the children of one directory

use std::io;
use std::path::Path;

use super::entry::Entry;

/// List the children of `dir` in display order.
///
/// Dot entries are dropped unless `show_hidden` is set. Directories (links
/// to directories included) come first, then everything else; each group
/// is sorted by raw name, case-sensitive.
///
/// Fails only if `dir` itself cannot be opened. Children that vanish or
/// fail to read mid-iteration are skipped.
pub fn list_entries(dir: &Path, show_hidden: bool) -> io::Result<Vec<Entry>> {
    let mut entries: Vec<(bool, Entry)> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| Entry::new(dir, e.file_name()))
        .filter(|entry| show_hidden || !entry.is_hidden())
        .map(|entry| (entry.is_dir(), entry))
        .collect();

    sort_entries(&mut entries);

    Ok(entries.into_iter().map(|(_, entry)| entry).collect())
}

/// Directories first, then ascending name.
fn sort_entries(entries: &mut [(bool, Entry)]) {
    entries.sort_by(|(a_dir, a), (b_dir, b)| b_dir.cmp(a_dir).then_with(|| a.name().cmp(b.name())));
}
