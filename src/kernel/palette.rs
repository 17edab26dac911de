#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteCommand {
    NewFile,
    FocusChat,
    FormatFile,
    OpenSettings,
}

#[derive(Debug, Clone)]
pub struct PaletteItem {
    pub id: &'static str,
    pub label: &'static str,
    pub label_lc: &'static str,
    pub shortcut: &'static str,
    pub command: PaletteCommand,
}

pub static PALETTE_ITEMS: &[PaletteItem] = &[
    PaletteItem {
        id: "new-file",
        label: "Create new file",
        label_lc: "create new file",
        shortcut: "N",
        command: PaletteCommand::NewFile,
    },
    PaletteItem {
        id: "toggle-chat",
        label: "Focus chat input",
        label_lc: "focus chat input",
        shortcut: "Shift + Enter",
        command: PaletteCommand::FocusChat,
    },
    PaletteItem {
        id: "format",
        label: "Format current file",
        label_lc: "format current file",
        shortcut: "Shift + F",
        command: PaletteCommand::FormatFile,
    },
    PaletteItem {
        id: "open-settings",
        label: "Open settings",
        label_lc: "open settings",
        shortcut: "Cmd + ,",
        command: PaletteCommand::OpenSettings,
    },
];

pub fn match_indices(query: &str) -> Vec<usize> {
    if query.trim().is_empty() {
        return (0..PALETTE_ITEMS.len()).collect();
    }

    let query_lc = query.to_lowercase();
    let mut matches = Vec::with_capacity(PALETTE_ITEMS.len());
    for (i, item) in PALETTE_ITEMS.iter().enumerate() {
        if item.label_lc.contains(&query_lc) {
            matches.push(i);
        }
    }
    matches
}

pub fn match_items(query: &str) -> Vec<&'static PaletteItem> {
    match_indices(query)
        .into_iter()
        .map(|i| &PALETTE_ITEMS[i])
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/palette.rs"]
mod tests;
