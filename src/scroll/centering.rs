//! Which month sits in the middle of the viewport

use super::layout::MonthLayout;

/// Index of the month whose center is nearest the viewport center
///
/// The viewport covers content rows `[offset, offset + viewport_height)`.
/// Ties go to the lowest index. Returns None when no month is mounted.
pub fn centered_month(layout: &MonthLayout, offset: u16, viewport_height: u16) -> Option<usize> {
    let viewport_center = 2 * offset as u32 + viewport_height as u32;

    let mut closest: Option<(usize, u32)> = None;
    for (index, extent) in layout.iter() {
        let distance = extent.doubled_center().abs_diff(viewport_center);
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((index, distance)),
        }
    }
    closest.map(|(index, _)| index)
}
