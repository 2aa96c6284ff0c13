//! Size hints and size policies for widget layout.
//!
//! These types carry the layout negotiation between widgets and their
//! parent layouts: what size a widget prefers, and how willing it is to
//! deviate from it.

use emberglow_render::Size;

/// Size policy determines how a widget should behave when space is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizePolicy {
    /// The widget cannot grow or shrink; it stays at its size hint.
    Fixed,

    /// The size hint is the minimum size; growing is allowed.
    Minimum,

    /// The size hint is the maximum size; shrinking is allowed.
    Maximum,

    /// The size hint is preferred but the widget can both grow and shrink.
    #[default]
    Preferred,

    /// The widget wants as much space as it can get.
    Expanding,
}

impl SizePolicy {
    /// Returns true if the policy allows the widget to grow.
    #[inline]
    pub fn can_grow(self) -> bool {
        !matches!(self, Self::Fixed | Self::Maximum)
    }

    /// Returns true if the policy allows the widget to shrink.
    #[inline]
    pub fn can_shrink(self) -> bool {
        !matches!(self, Self::Fixed | Self::Minimum)
    }
}

/// Combined horizontal and vertical size policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePolicyPair {
    /// Horizontal size policy.
    pub horizontal: SizePolicy,
    /// Vertical size policy.
    pub vertical: SizePolicy,
}

impl SizePolicyPair {
    /// Create a new size policy pair.
    pub fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// A widget's size preferences for layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    /// The size the widget would like to have.
    pub preferred: Size,
    /// The smallest size the widget can usefully render at.
    pub minimum: Size,
}

impl SizeHint {
    /// Create a size hint with the given preferred size.
    ///
    /// The minimum defaults to zero.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: Size::ZERO,
        }
    }

    /// Create a size hint from preferred dimensions.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Set the minimum size using builder pattern.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = minimum;
        self
    }

    /// Set the minimum dimensions using builder pattern.
    pub fn with_minimum_dimensions(mut self, width: f32, height: f32) -> Self {
        self.minimum = Size::new(width, height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_grow_shrink() {
        assert!(!SizePolicy::Fixed.can_grow());
        assert!(!SizePolicy::Fixed.can_shrink());
        assert!(SizePolicy::Preferred.can_grow());
        assert!(SizePolicy::Preferred.can_shrink());
        assert!(SizePolicy::Minimum.can_grow());
        assert!(!SizePolicy::Minimum.can_shrink());
    }

    #[test]
    fn hint_builders() {
        let hint = SizeHint::from_dimensions(80.0, 30.0).with_minimum_dimensions(40.0, 24.0);
        assert_eq!(hint.preferred, Size::new(80.0, 30.0));
        assert_eq!(hint.minimum, Size::new(40.0, 24.0));
    }
}
