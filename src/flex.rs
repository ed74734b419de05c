/// Splits `leftover` among `count` flexible children.
///
/// Every child gets the same whole-unit share; the whole units that do not divide
/// evenly go one at a time to the first children in declaration order. A sub-unit
/// residue, if any, goes to the first child that did not get an extra unit, so the
/// shares always sum to `leftover`.
pub fn distribute_leftover(leftover: f32, count: usize) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let leftover = if leftover.is_finite() { leftover.max(0.0) } else { 0.0 };

    let base = (leftover / count as f32).floor();
    let remainder = leftover - base * count as f32;
    let extra_units = (remainder.floor() as usize).min(count - 1);
    let residue = remainder - extra_units as f32;

    let mut shares = vec![base; count];
    for share in shares.iter_mut().take(extra_units) {
        *share += 1.0;
    }
    if residue > 0.0 {
        shares[extra_units] += residue;
    }
    shares
}

pub fn total_spacing(spacing: f32, count: usize) -> f32 {
    spacing.max(0.0) * count.saturating_sub(1) as f32
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_goes_to_first_children() {
        assert_eq!(distribute_leftover(10.0, 3), vec![4.0, 3.0, 3.0]);
        assert_eq!(distribute_leftover(11.0, 3), vec![4.0, 4.0, 3.0]);
        assert_eq!(distribute_leftover(9.0, 3), vec![3.0, 3.0, 3.0]);
    }

    #[test]
    fn fractional_residue_is_kept() {
        let shares = distribute_leftover(10.5, 3);
        assert_eq!(shares, vec![4.0, 3.5, 3.0]);
        assert_eq!(shares.iter().sum::<f32>(), 10.5);
    }

    #[test]
    fn less_than_one_unit_per_child() {
        assert_eq!(distribute_leftover(2.0, 3), vec![1.0, 1.0, 0.0]);
        assert_eq!(distribute_leftover(0.25, 2), vec![0.25, 0.0]);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(distribute_leftover(10.0, 0).is_empty());
        assert_eq!(distribute_leftover(-4.0, 2), vec![0.0, 0.0]);
        assert_eq!(distribute_leftover(f32::NAN, 2), vec![0.0, 0.0]);
    }

    #[test]
    fn spacing_between_children() {
        assert_eq!(total_spacing(8.0, 0), 0.0);
        assert_eq!(total_spacing(8.0, 1), 0.0);
        assert_eq!(total_spacing(8.0, 4), 24.0);
    }
}
