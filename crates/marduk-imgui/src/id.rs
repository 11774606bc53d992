use std::fmt;
use std::num::NonZeroU32;

/// Caller-assigned widget identifier.
///
/// Must be stable across frames and unique within a frame. Zero is reserved
/// as "no widget", so the type wraps a [`NonZeroU32`] and absence is spelled
/// `Option<WidgetId>` (same size as `u32`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct WidgetId(NonZeroU32);

impl WidgetId {
    /// Returns `None` for `0`.
    #[inline]
    pub const fn new(raw: u32) -> Option<Self> {
        match NonZeroU32::new(raw) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Builds an id for a `const` item.
    ///
    /// # Panics
    /// Panics for `0`, which in a `const` initializer is a compile error.
    ///
    /// ```
    /// use marduk_imgui::WidgetId;
    /// const SAVE: WidgetId = WidgetId::from_const(1);
    /// assert_eq!(SAVE.get(), 1);
    /// ```
    #[inline]
    pub const fn from_const(raw: u32) -> Self {
        match NonZeroU32::new(raw) {
            Some(n) => Self(n),
            None => panic!("WidgetId 0 is reserved"),
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
