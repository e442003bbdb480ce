//! Quantity stepper state machine
//!
//! Mediates between an externally-controlled quantity (cart state, product
//! stock) and in-progress user edits. One authoritative value; the owning
//! context pushes updates through [`QuantityStepper::set_external`] and hears
//! about user interaction through the registered callbacks.

use tracing::debug;

/// Per-transition callback, receives the newly computed quantity.
type Callback = Box<dyn FnMut(u32) + Send>;

/// Parse typed quantity text leniently.
///
/// Empty, non-numeric, and negative input all degrade to 0; values beyond
/// `u32::MAX` saturate. Never fails.
pub fn parse_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n <= 0 => 0,
        Ok(n) => u32::try_from(n).unwrap_or(u32::MAX),
        Err(_) => 0,
    }
}

/// Clamp a quantity into `[1, max]`, or `[1, u32::MAX]` when unbounded.
///
/// The floor is applied last, so a degenerate `max` of 0 still yields 1.
pub fn clamp_quantity(value: u32, max: Option<u32>) -> u32 {
    let ceiled = match max {
        Some(max) => value.min(max),
        None => value,
    };
    ceiled.max(1)
}

/// Quantity stepper control state
///
/// All operations are synchronous; the registered callbacks are the only
/// observable side effects. No I/O happens here — persistence belongs to the
/// owning context.
pub struct QuantityStepper {
    /// Authoritative quantity value.
    value: u32,
    /// Upper bound (typically stock on hand); `None` means unbounded.
    max: Option<u32>,
    /// Fired on every live-typing edit with the clamped value.
    on_type: Option<Callback>,
    /// Fired when the `+` control is used.
    on_increase: Option<Callback>,
    /// Fired when the `-` control is used.
    on_decrease: Option<Callback>,
    /// Fired on focus loss with the parsed, un-clamped value.
    on_focus_out: Option<Callback>,
}

impl QuantityStepper {
    /// Create a stepper with an optional initial value and ceiling.
    ///
    /// A missing initial value starts at 0; the first interaction clamps it
    /// up to the floor of 1.
    pub fn new(initial: Option<u32>, max: Option<u32>) -> Self {
        Self {
            value: initial.unwrap_or(0),
            max,
            on_type: None,
            on_increase: None,
            on_decrease: None,
            on_focus_out: None,
        }
    }

    /// Register the live-typing callback.
    pub fn on_type(mut self, callback: impl FnMut(u32) + Send + 'static) -> Self {
        self.on_type = Some(Box::new(callback));
        self
    }

    /// Register the increase callback.
    pub fn on_increase(mut self, callback: impl FnMut(u32) + Send + 'static) -> Self {
        self.on_increase = Some(Box::new(callback));
        self
    }

    /// Register the decrease callback.
    pub fn on_decrease(mut self, callback: impl FnMut(u32) + Send + 'static) -> Self {
        self.on_decrease = Some(Box::new(callback));
        self
    }

    /// Register the focus-loss callback.
    pub fn on_focus_out(mut self, callback: impl FnMut(u32) + Send + 'static) -> Self {
        self.on_focus_out = Some(Box::new(callback));
        self
    }

    /// Current authoritative value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Current ceiling.
    pub fn max(&self) -> Option<u32> {
        self.max
    }

    /// Adopt an externally-controlled value as the new baseline.
    ///
    /// No clamping (the owner is assumed to supply a valid quantity) and no
    /// callback. Used when cart state changes out-of-band.
    pub fn set_external(&mut self, value: u32) {
        debug!(value, "quantity adopt external");
        self.value = value;
    }

    /// Update the ceiling (e.g. stock changed). Does not re-clamp the
    /// current value; the next interaction does.
    pub fn set_max(&mut self, max: Option<u32>) {
        self.max = max;
    }

    /// Live-typing edit: parse, clamp, store, fire `on_type`.
    pub fn edit(&mut self, raw: &str) -> u32 {
        let next = clamp_quantity(parse_quantity(raw), self.max);
        debug!(raw, next, "quantity edit");
        self.value = next;
        if let Some(callback) = &mut self.on_type {
            callback(next);
        }
        next
    }

    /// Step up, saturating at the ceiling.
    pub fn increase(&mut self) -> u32 {
        let mut next = self.value.saturating_add(1);
        if let Some(max) = self.max {
            next = next.min(max);
        }
        debug!(next, "quantity increase");
        self.value = next;
        if let Some(callback) = &mut self.on_increase {
            callback(next);
        }
        next
    }

    /// Step down, saturating at the floor of 1.
    pub fn decrease(&mut self) -> u32 {
        let next = self.value.saturating_sub(1).max(1);
        debug!(next, "quantity decrease");
        self.value = next;
        if let Some(callback) = &mut self.on_decrease {
            callback(next);
        }
        next
    }

    /// Focus-loss commit: parse only, no clamp, no state mutation.
    ///
    /// The parsed value is forwarded as-is through `on_focus_out`; the owning
    /// context finalizes, clamps, persists, and feeds the result back via
    /// [`set_external`](Self::set_external).
    pub fn commit(&mut self, raw: &str) -> u32 {
        let parsed = parse_quantity(raw);
        debug!(raw, parsed, "quantity commit");
        if let Some(callback) = &mut self.on_focus_out {
            callback(parsed);
        }
        parsed
    }
}

impl std::fmt::Debug for QuantityStepper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuantityStepper")
            .field("value", &self.value)
            .field("max", &self.max)
            .finish()
    }
}
