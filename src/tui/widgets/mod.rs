pub mod mode_tabs;
pub mod ring;
pub mod stat_card;
pub mod timer;

/// Flatten a rendered buffer into one string, row after row.
#[cfg(test)]
pub fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    buf.content.iter().map(|cell| cell.symbol()).collect()
}
