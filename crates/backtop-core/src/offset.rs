//! Strategy selection for reading the vertical scroll offset.
//!
//! Hosts disagree on where the offset lives, so the frontend supplies an
//! ordered list of probes and the first one that yields a value wins.

/// One way of asking the host environment for the scroll offset.
pub type OffsetProbe<'a> = &'a dyn Fn() -> Option<f64>;

/// Try each probe in order and return the first defined offset. Probes after
/// the first hit are not invoked.
#[inline]
pub fn select_offset(probes: &[OffsetProbe<'_>]) -> Option<f64> {
    probes.iter().find_map(|probe| probe())
}
