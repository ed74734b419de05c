use crate::math::{Axis, Size};

#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub enum Dimension {
    #[default]
    Unspecified,
    Finite(f32),
    Infinite,
}

impl Dimension {
    pub fn sanitized(self) -> Dimension {
        match self {
            Dimension::Finite(value) => Dimension::from(value),
            other => other
        }
    }

    pub fn finite(&self) -> Option<f32> {
        match self {
            Dimension::Finite(value) => Some(*value),
            _ => None
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Dimension::Finite(_))
    }

    pub fn clamp(&self, extent: f32) -> f32 {
        match self {
            Dimension::Finite(bound) => extent.min(*bound),
            _ => extent
        }
    }

    /// Resolves the proposal for an element whose extent may range over `[min, max]`.
    pub fn resolve(&self, min: f32, max: f32) -> f32 {
        match self {
            Dimension::Unspecified => min,
            Dimension::Finite(value) => value.min(max).max(min),
            Dimension::Infinite => max
        }
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        if value.is_nan() {
            Dimension::Unspecified
        } else if value == f32::INFINITY {
            Dimension::Infinite
        } else {
            Dimension::Finite(value.max(0.0))
        }
    }
}

impl From<Option<f32>> for Dimension {
    fn from(value: Option<f32>) -> Self {
        value.map_or(Dimension::Unspecified, Dimension::from)
    }
}


#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct SizeProposal {
    pub width: Dimension,
    pub height: Dimension,
}

impl SizeProposal {
    pub const UNSPECIFIED: SizeProposal = SizeProposal { width: Dimension::Unspecified, height: Dimension::Unspecified };
    pub const INFINITE: SizeProposal = SizeProposal { width: Dimension::Infinite, height: Dimension::Infinite };
    pub const ZERO: SizeProposal = SizeProposal { width: Dimension::Finite(0.0), height: Dimension::Finite(0.0) };

    pub fn new(width: impl Into<Dimension>, height: impl Into<Dimension>) -> SizeProposal {
        SizeProposal {
            width: width.into().sanitized(),
            height: height.into().sanitized()
        }
    }

    pub fn exact(size: Size) -> SizeProposal {
        SizeProposal::new(size.width, size.height)
    }

    pub fn from_axes(main_axis: Axis, main: Dimension, cross: Dimension) -> SizeProposal {
        match main_axis {
            Axis::Horizontal => SizeProposal::new(main, cross),
            Axis::Vertical => SizeProposal::new(cross, main)
        }
    }

    pub fn axis(&self, axis: Axis) -> Dimension {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height
        }
    }

    pub fn sanitized(&self) -> SizeProposal {
        SizeProposal {
            width: self.width.sanitized(),
            height: self.height.sanitized()
        }
    }

    pub fn clamp(&self, size: Size) -> Size {
        Size::new(self.width.clamp(size.width), self.height.clamp(size.height))
    }

    pub fn fits_axis(&self, axis: Axis, size: Size) -> bool {
        match self.axis(axis) {
            Dimension::Finite(bound) => size.axis(axis) <= bound,
            _ => true
        }
    }

    pub fn fits(&self, size: Size) -> bool {
        self.fits_axis(Axis::Horizontal, size) && self.fits_axis(Axis::Vertical, size)
    }
}

impl From<Size> for SizeProposal {
    fn from(value: Size) -> Self {
        SizeProposal::exact(value)
    }
}

impl From<(f32, f32)> for SizeProposal {
    fn from(value: (f32, f32)) -> Self {
        SizeProposal::new(value.0, value.1)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_values_are_sanitized() {
        assert_eq!(Dimension::from(f32::NAN), Dimension::Unspecified);
        assert_eq!(Dimension::from(-5.0), Dimension::Finite(0.0));
        assert_eq!(Dimension::from(f32::INFINITY), Dimension::Infinite);
        assert_eq!(Dimension::Finite(f32::NAN).sanitized(), Dimension::Unspecified);
    }

    #[test]
    fn only_finite_axes_bound_fitting() {
        let proposal = SizeProposal::new(150.0, Dimension::Unspecified);
        assert!(proposal.fits(Size::new(150.0, 10_000.0)));
        assert!(!proposal.fits(Size::new(150.5, 1.0)));
        assert!(SizeProposal::INFINITE.fits(Size::new(f32::INFINITY, f32::INFINITY)));
    }

    #[test]
    fn resolve_picks_bounds_for_non_finite_axes() {
        assert_eq!(Dimension::Unspecified.resolve(10.0, 50.0), 10.0);
        assert_eq!(Dimension::Infinite.resolve(10.0, 50.0), 50.0);
        assert_eq!(Dimension::Finite(70.0).resolve(10.0, 50.0), 50.0);
        assert_eq!(Dimension::Finite(5.0).resolve(10.0, 50.0), 10.0);
    }

    #[test]
    fn from_axes_maps_main_axis() {
        let proposal = SizeProposal::from_axes(Axis::Vertical, Dimension::Unspecified, Dimension::Finite(30.0));
        assert_eq!(proposal.width, Dimension::Finite(30.0));
        assert_eq!(proposal.height, Dimension::Unspecified);
    }
}
