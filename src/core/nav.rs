/// Index of the last section whose top edge has scrolled past the
/// lookahead line, if any. Sections must be given in document order.
pub fn active_section(scroll_y: f64, section_tops: &[f64], lookahead: f64) -> Option<usize> {
    let mut current = None;
    for (i, top) in section_tops.iter().enumerate() {
        if scroll_y >= top - lookahead {
            current = Some(i);
        }
    }
    current
}
