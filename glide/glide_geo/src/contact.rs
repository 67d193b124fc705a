use crate::shape::Shape;
use glide_math::math::clamp;

type Contact_Cb = fn(&Shape, &Shape) -> bool;

// Indexed by [kind of a][kind of b]; Point and Circle share the "round"
// algorithms (a point is a zero-radius circle).
const CONTACT_CB_TABLE: [[Contact_Cb; 3]; 3] = [
    [contact_round_round, contact_round_round, contact_round_rect],
    [contact_round_round, contact_round_round, contact_round_rect],
    [contact_rect_round, contact_rect_round, contact_rect_rect],
];

/// Overlap test between any two shapes. Symmetric in its arguments.
pub fn contact(a: &Shape, b: &Shape) -> bool {
    CONTACT_CB_TABLE[a.kind_index()][b.kind_index()](a, b)
}

/// Strict test: circles exactly tangent are NOT in contact. Time-to-hit
/// depends on this to report tangency as a hit at time zero rather than a
/// pre-existing contact.
pub(crate) fn contact_round_round(a: &Shape, b: &Shape) -> bool {
    let reach = a.radius() + b.radius();
    (a.center() - b.center()).magnitude2() < reach * reach
}

/// Closed test: a circle touching the rectangle's boundary counts as contact,
/// so the region walk of time-to-hit can short-circuit exactly at the moment
/// the gap closes.
pub(crate) fn contact_round_rect(round: &Shape, rect: &Shape) -> bool {
    let offset = round.center() - rect.corner();
    let size = rect.diagonal();
    let closest = v2!(clamp(offset.x, 0., size.x), clamp(offset.y, 0., size.y));
    let radius = round.radius();
    (closest - offset).magnitude2() <= radius * radius
}

fn contact_rect_round(rect: &Shape, round: &Shape) -> bool {
    contact_round_rect(round, rect)
}

/// Closed axis-aligned overlap test.
pub(crate) fn contact_rect_rect(a: &Shape, b: &Shape) -> bool {
    let dist = a.center() - b.center();
    let reach = (a.diagonal() + b.diagonal()) * 0.5;
    dist.x.abs() <= reach.x && dist.y.abs() <= reach.y
}
