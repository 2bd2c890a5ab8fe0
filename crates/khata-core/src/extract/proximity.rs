//! Positional association: resolve which occurrence belongs to which anchor
//! by line-index proximity.

use super::occurrences::Occurrence;

/// All candidates whose line index falls within `radius` lines of the
/// anchor, in first-seen order.
pub fn within_window<'a>(
    anchor: &Occurrence,
    candidates: &'a [Occurrence],
    radius: usize,
) -> Vec<&'a Occurrence> {
    let lo = anchor.line_index.saturating_sub(radius);
    let hi = anchor.line_index + radius;
    candidates
        .iter()
        .filter(|c| c.line_index >= lo && c.line_index <= hi)
        .collect()
}

/// The in-window candidate closest to the anchor by line index. Ties go to
/// the first-seen candidate.
pub fn nearest<'a>(
    anchor: &Occurrence,
    candidates: &'a [Occurrence],
    radius: usize,
) -> Option<&'a Occurrence> {
    pick_nearest(anchor, &within_window(anchor, candidates, radius))
}

/// Like [`nearest`], but restricted to a preferred subset first; the full
/// in-window set is consulted only when the preferred subset is empty.
pub fn nearest_preferred<'a, F>(
    anchor: &Occurrence,
    candidates: &'a [Occurrence],
    radius: usize,
    is_preferred: F,
) -> Option<&'a Occurrence>
where
    F: Fn(&Occurrence) -> bool,
{
    let in_window = within_window(anchor, candidates, radius);
    let preferred: Vec<&Occurrence> = in_window
        .iter()
        .copied()
        .filter(|c| is_preferred(c))
        .collect();

    if preferred.is_empty() {
        pick_nearest(anchor, &in_window)
    } else {
        pick_nearest(anchor, &preferred)
    }
}

/// Among in-window candidates with `value >= min_value`, the one whose value
/// is numerically closest to the anchor's own value. Used to attach a
/// running balance to a movement.
pub fn closest_by_value<'a>(
    anchor: &Occurrence,
    candidates: &'a [Occurrence],
    radius: usize,
    min_value: f64,
) -> Option<&'a Occurrence> {
    let mut best: Option<&Occurrence> = None;
    let mut best_delta = f64::INFINITY;

    for c in within_window(anchor, candidates, radius) {
        if c.value < min_value {
            continue;
        }
        let delta = (c.value - anchor.value).abs();
        if delta < best_delta {
            best = Some(c);
            best_delta = delta;
        }
    }

    best
}

fn pick_nearest<'a>(
    anchor: &Occurrence,
    pool: &[&'a Occurrence],
) -> Option<&'a Occurrence> {
    let mut best: Option<&'a Occurrence> = None;
    let mut best_dist = usize::MAX;

    for &c in pool {
        let dist = c.line_index.abs_diff(anchor.line_index);
        // strictly-less keeps the first-seen candidate on ties
        if dist < best_dist {
            best = Some(c);
            best_dist = dist;
        }
    }

    best
}
