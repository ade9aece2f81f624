//! Native scrollbar thickness.
//!
//! The body shows native scrollbars while the header does not, so the header must be widened by
//! the vertical scrollbar's thickness for columns to line up. The thickness is platform specific
//! and has to be measured from the host environment, which is abstracted by [`ScrollbarProbe`].

use alloc::borrow::Cow;
use core::cell::Cell;

/// Thickness of the vertical (`width`) and horizontal (`height`) scrollbars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarSize {
    pub width: u32,
    pub height: u32,
}

impl ScrollbarSize {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// The same thickness for both bars.
    pub fn uniform(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

/// Raw widths read from the offscreen measuring container.
///
/// The container is a hidden, absolutely positioned 100×50 px box holding a child that is 100%
/// wide and 100 px tall, so switching the box from `overflow: hidden` to `overflow: scroll` makes
/// the child lose exactly one scrollbar's width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeMeasurement {
    /// Child width with `overflow: hidden`.
    pub width_contained: u32,
    /// Child width with `overflow: scroll`.
    pub width_scroll: u32,
    /// Client width of the box with `overflow: scroll`.
    pub outer_client_width: u32,
}

impl ProbeMeasurement {
    pub fn thickness(&self) -> u32 {
        // Some engines keep the child at full width and only shrink the box's client area.
        let scroll = if self.width_contained == self.width_scroll {
            self.outer_client_width
        } else {
            self.width_scroll
        };
        self.width_contained.saturating_sub(scroll)
    }
}

/// Access to the host's layout engine.
pub trait ScrollbarProbe {
    /// Mounts the measuring container, reads it and removes it again.
    ///
    /// Returns `None` when there is no document to measure in.
    fn measure(&self) -> Option<ProbeMeasurement>;
}

impl<P: ScrollbarProbe + ?Sized> ScrollbarProbe for alloc::boxed::Box<P> {
    fn measure(&self) -> Option<ProbeMeasurement> {
        (**self).measure()
    }
}

/// A probe for hosts that know their scrollbar thickness up front (terminals, overlay
/// scrollbars, tests).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedProbe(pub u32);

impl ScrollbarProbe for FixedProbe {
    fn measure(&self) -> Option<ProbeMeasurement> {
        Some(ProbeMeasurement {
            width_contained: 100,
            width_scroll: 100u32.saturating_sub(self.0),
            outer_client_width: 100u32.saturating_sub(self.0),
        })
    }
}

/// Lazily measured scrollbar thickness.
///
/// The first call to [`Self::size`] measures and caches the thickness; later calls return the
/// cached value unless a fresh measurement is requested. Without a probe (or when the probe has
/// no document) the size is `0` and nothing is cached.
#[derive(Debug, Default)]
pub struct ScrollbarMeasurer<P> {
    probe: Option<P>,
    cached: Cell<Option<u32>>,
}

impl<P: ScrollbarProbe> ScrollbarMeasurer<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe: Some(probe),
            cached: Cell::new(None),
        }
    }

    /// A measurer for environments without a document; always reports `0`.
    pub fn detached() -> Self {
        Self {
            probe: None,
            cached: Cell::new(None),
        }
    }

    pub fn set_probe(&mut self, probe: Option<P>) {
        self.probe = probe;
        self.cached.set(None);
    }

    pub fn cached(&self) -> Option<u32> {
        self.cached.get()
    }

    pub fn size(&self, fresh: bool) -> u32 {
        if !fresh {
            if let Some(size) = self.cached.get() {
                return size;
            }
        }
        let Some(measurement) = self.probe.as_ref().and_then(|p| p.measure()) else {
            return 0;
        };
        let size = measurement.thickness();
        gdebug!(size, fresh, "scrollbar measured");
        self.cached.set(Some(size));
        size
    }

    /// The same thickness for both scrollbars.
    pub fn scrollbar_size(&self) -> ScrollbarSize {
        ScrollbarSize::uniform(self.size(false))
    }

    /// Reads the scrollbar size of a styled element.
    ///
    /// Values that are not `<number>px` fall back to the measured thickness; `None` yields zero.
    pub fn target_size(&self, target: Option<&dyn ScrollbarStyle>) -> ScrollbarSize {
        let Some(target) = target else {
            return ScrollbarSize::ZERO;
        };
        let ensure = |value: Option<Cow<'_, str>>| {
            value
                .as_deref()
                .and_then(parse_px)
                .unwrap_or_else(|| self.size(false))
        };
        ScrollbarSize {
            width: ensure(target.scrollbar_width()),
            height: ensure(target.scrollbar_height()),
        }
    }
}

/// Computed `::-webkit-scrollbar` style of an element.
pub trait ScrollbarStyle {
    fn scrollbar_width(&self) -> Option<Cow<'_, str>>;
    fn scrollbar_height(&self) -> Option<Cow<'_, str>>;
}

/// Parses a CSS pixel length such as `"12px"` or `"8.5px"`, rounding to whole pixels.
pub fn parse_px(value: &str) -> Option<u32> {
    let number = value.trim().strip_suffix("px")?.trim();
    let parsed: f64 = number.parse().ok()?;
    if !parsed.is_finite() || parsed < 0.0 {
        return None;
    }
    // f64 -> u32 `as` saturates.
    Some((parsed + 0.5) as u32)
}
