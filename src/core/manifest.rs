//! Manifest rendering: the generated TypeScript file's text.

use std::collections::BTreeSet;

use super::resolve::CanonicalIcon;

/// Module the generated file imports its icon definitions from.
pub const ICON_MODULE: &str = "@ant-design/icons-angular/icons";

/// Render the manifest text for a sorted, deduplicated icon set.
///
/// The import list and the `ANT_ICONS` export array carry the same
/// entries, four-space indented, with a trailing comma after every entry
/// except the last. Identical input sets yield byte-identical output
/// regardless of discovery order; `BTreeSet` iteration supplies the
/// lexicographic order. Pure: writing the file is the caller's concern.
pub fn build_manifest(icons: &BTreeSet<CanonicalIcon>) -> String {
    let mut entries = icons
        .iter()
        .map(|icon| format!("    {}", icon))
        .collect::<Vec<_>>()
        .join(",\n");
    if !entries.is_empty() {
        entries.push('\n');
    }

    format!(
        "import {{\n{}}} from '{}';\n\nexport const ANT_ICONS = [\n{}];\n",
        entries, ICON_MODULE, entries
    )
}
