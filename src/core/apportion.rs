//! Largest-remainder apportionment.

/// Split `capacity` whole units across `N` shares so the parts sum to `capacity`.
///
/// Each entry first receives the floor of `capacity * percent`. The units
/// lost to flooring are then handed out one at a time, largest fractional
/// remainder first. Ties keep input order. If the percentages sum to less
/// than one (all zero, for instance) the hand-out cycles through that order
/// again until nothing is left.
///
/// Non-finite or negative percentages count as 0.
pub fn apportion<const N: usize>(capacity: u64, percents: [f64; N]) -> [u64; N] {
    let mut result = [0u64; N];
    if N == 0 {
        return result;
    }

    let shares = percents.map(|p| {
        let p = if p.is_finite() && p > 0.0 { p } else { 0.0 };
        capacity as f64 * p
    });

    // floors can overshoot `capacity` by rounding once shares pass 2^53
    let mut assigned = 0u64;
    for (slot, share) in result.iter_mut().zip(shares) {
        *slot = (share.floor() as u64).min(capacity - assigned);
        assigned += *slot;
    }

    let mut remainder = capacity - assigned;

    let mut order: Vec<(usize, f64)> = shares
        .iter()
        .enumerate()
        .map(|(i, share)| (i, share - share.floor()))
        .collect();
    // stable, so equal remainders stay in input order
    order.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut i = 0;
    while remainder > 0 {
        result[order[i % N].0] += 1;
        remainder -= 1;
        i += 1;
    }

    result
}
