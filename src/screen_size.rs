use std::ops::{BitOr, Bound, RangeBounds};

use bitflags::bitflags;

use crate::breakpoints::ScreenSizeBp;

bitflags! {
  #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
  #[must_use]
  pub struct SizeFlags: u8 {
    const XS = 1;
    const SM = 2;
    const MD = 4;
    const LG = 8;
    const XL = 16;
    const XXL = 32;
  }
}

impl From<ScreenSizeBp> for SizeFlags {
    fn from(bp: ScreenSizeBp) -> Self {
        SizeFlags::from_bits_truncate(1 << bp.index())
    }
}

/// A set of grid tiers.
///
/// Built from the tier constants with `|`, [`ScreenSize::not`] and [`range`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScreenSize {
    flags: SizeFlags,
}

impl ScreenSize {
    pub const XS: ScreenSize = ScreenSize::new(SizeFlags::XS);
    pub const SM: ScreenSize = ScreenSize::new(SizeFlags::SM);
    pub const MD: ScreenSize = ScreenSize::new(SizeFlags::MD);
    pub const LG: ScreenSize = ScreenSize::new(SizeFlags::LG);
    pub const XL: ScreenSize = ScreenSize::new(SizeFlags::XL);
    pub const XXL: ScreenSize = ScreenSize::new(SizeFlags::XXL);
    pub const ALL: ScreenSize = ScreenSize::new(SizeFlags::all());

    const fn new(flags: SizeFlags) -> Self {
        Self { flags }
    }

    pub const fn not(size: ScreenSize) -> Self {
        let flags = SizeFlags::all().difference(size.flags);
        Self { flags }
    }

    pub fn flags(&self) -> SizeFlags {
        self.flags
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn contains(&self, bp: ScreenSizeBp) -> bool {
        self.flags.contains(SizeFlags::from(bp))
    }

    /// The tiers in this set, narrowest first.
    pub fn breakpoints(&self) -> impl Iterator<Item = ScreenSizeBp> + '_ {
        ScreenSizeBp::ALL.into_iter().filter(|bp| self.contains(*bp))
    }

    fn lowest(&self) -> Option<u8> {
        (!self.flags.is_empty()).then(|| self.flags.bits().trailing_zeros() as u8)
    }

    fn highest(&self) -> Option<u8> {
        (!self.flags.is_empty()).then(|| 7 - self.flags.bits().leading_zeros() as u8)
    }
}

impl From<ScreenSizeBp> for ScreenSize {
    fn from(bp: ScreenSizeBp) -> Self {
        Self::new(bp.into())
    }
}

impl BitOr for ScreenSize {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.flags | rhs.flags)
    }
}

/// Every tier between the bounds.
///
/// A bound holding several tiers contributes its lowest tier as the start and
/// its highest as the end, so `range(XS | SM..=MD | LG)` spans `XS` to `LG`.
/// An empty result is returned when the range is inverted or a bound is empty.
pub fn range<R: RangeBounds<ScreenSize>>(range: R) -> ScreenSize {
    let start = match range.start_bound() {
        Bound::Included(s) => s.lowest(),
        Bound::Excluded(s) => s.lowest().map(|bit| bit + 1),
        Bound::Unbounded => Some(0),
    };
    let end = match range.end_bound() {
        Bound::Included(e) => e.highest(),
        Bound::Excluded(e) => e.highest().and_then(|bit| bit.checked_sub(1)),
        Bound::Unbounded => Some(5),
    };
    let (Some(start), Some(end)) = (start, end) else {
        return ScreenSize::new(SizeFlags::empty());
    };
    if start > end || start > 5 {
        return ScreenSize::new(SizeFlags::empty());
    }

    // Bits start..=end.
    let bits = (u8::MAX >> (7 - end)) & (u8::MAX << start);
    ScreenSize::new(SizeFlags::from_bits_truncate(bits))
}
