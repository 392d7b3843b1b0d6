use super::easing::{ease_out_quad, EasingFn};

/// Pixel height of one wheel "line" when the browser reports line deltas.
pub const LINE_HEIGHT: f64 = 100.0 / 6.0;

/// `WheelEvent.deltaMode` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaMode {
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => DeltaMode::Line,
            2 => DeltaMode::Page,
            _ => DeltaMode::Pixel,
        }
    }
}

/// Convert a raw wheel delta to pixels.
pub fn normalize_wheel_delta(delta: f64, mode: DeltaMode, viewport_height: f64) -> f64 {
    match mode {
        DeltaMode::Pixel => delta,
        DeltaMode::Line => delta * LINE_HEIGHT,
        DeltaMode::Page => delta * viewport_height,
    }
}

/// Tuning for the smooth-scroll engine.
#[derive(Debug, Clone, Copy)]
pub struct ScrollOptions {
    /// Tween length in seconds.
    pub duration: f64,
    pub easing: EasingFn,
    /// Whether wheel input is intercepted and animated.
    pub smooth_wheel: bool,
    pub wheel_multiplier: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            duration: 1.2,
            easing: ease_out_quad,
            smooth_wheel: true,
            wheel_multiplier: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f64,
    to: f64,
    elapsed: f64,
}

/// Smooth-scroll state: an animated position chasing a clamped target.
///
/// The engine knows nothing about the DOM. Callers feed it wheel input and
/// frame timestamps (milliseconds) and apply whatever position it returns.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    options: ScrollOptions,
    position: f64,
    target: f64,
    limit: f64,
    tween: Option<Tween>,
    last_frame: Option<f64>,
}

impl SmoothScroll {
    pub fn new(options: ScrollOptions, limit: f64) -> Self {
        Self {
            options,
            position: 0.0,
            target: 0.0,
            limit: limit.max(0.0),
            tween: None,
            last_frame: None,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Update the scrollable range, e.g. after layout changes.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.clamp(self.target);
        match self.tween.as_mut() {
            Some(tween) => tween.to = self.target,
            None => self.position = self.clamp(self.position),
        }
    }

    /// Feed a wheel delta in pixels. Returns `false` when wheel smoothing is
    /// disabled and the native scroll should proceed.
    pub fn wheel(&mut self, delta: f64) -> bool {
        if !self.options.smooth_wheel {
            return false;
        }
        let target = self.target + delta * self.options.wheel_multiplier;
        self.animate_to(target);
        true
    }

    /// Start a tween toward `target`.
    pub fn scroll_to(&mut self, target: f64) {
        self.animate_to(target);
    }

    /// Adopt a native scroll offset. Ignored while a tween is running, since
    /// the engine itself is then the source of scroll events.
    ///
    /// The browser already scrolled there, so an offset past a stale limit
    /// raises the limit instead of being clamped.
    pub fn sync(&mut self, native: f64) {
        if self.tween.is_none() {
            let native = native.max(0.0);
            self.limit = self.limit.max(native);
            self.position = native;
            self.target = native;
        }
    }

    /// Advance to the frame at `time` (milliseconds). Returns the new position
    /// when a tween moved it.
    pub fn frame(&mut self, time: f64) -> Option<f64> {
        let delta = self
            .last_frame
            .map(|last| ((time - last) / 1000.0).max(0.0))
            .unwrap_or(0.0);
        self.last_frame = Some(time);

        let mut tween = self.tween.take()?;
        tween.elapsed += delta;
        let progress = if self.options.duration > 0.0 {
            tween.elapsed / self.options.duration
        } else {
            1.0
        };
        if progress >= 1.0 {
            self.position = tween.to;
        } else {
            self.position = tween.from + (tween.to - tween.from) * (self.options.easing)(progress);
            self.tween = Some(tween);
        }
        Some(self.position)
    }

    fn animate_to(&mut self, target: f64) {
        self.target = self.clamp(target);
        if (self.target - self.position).abs() < f64::EPSILON {
            self.tween = None;
            return;
        }
        self.tween = Some(Tween {
            from: self.position,
            to: self.target,
            elapsed: 0.0,
        });
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(0.0, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(limit: f64) -> SmoothScroll {
        SmoothScroll::new(ScrollOptions::default(), limit)
    }

    #[test]
    fn test_wheel_is_clamped_to_range() {
        let mut scroll = engine(500.0);
        assert!(scroll.wheel(800.0));
        assert_eq!(scroll.target(), 500.0);
        assert!(scroll.wheel(-2000.0));
        assert_eq!(scroll.target(), 0.0);
    }

    #[test]
    fn test_tween_follows_easing_and_lands_on_target() {
        let mut scroll = engine(1000.0);
        scroll.wheel(100.0);

        // first frame only establishes the clock
        assert_eq!(scroll.frame(0.0), Some(0.0));

        let halfway = scroll.frame(600.0).unwrap();
        assert!((halfway - 75.0).abs() < 1e-9, "halfway = {halfway}");

        assert_eq!(scroll.frame(1250.0), Some(100.0));
        assert!(!scroll.is_animating());
        assert_eq!(scroll.frame(1300.0), None);
    }

    #[test]
    fn test_new_input_restarts_from_current_position() {
        let mut scroll = engine(1000.0);
        scroll.wheel(100.0);
        scroll.frame(0.0);
        let mid = scroll.frame(600.0).unwrap();

        scroll.wheel(100.0);
        assert_eq!(scroll.target(), 200.0);
        let next = scroll.frame(616.0).unwrap();
        assert!(next >= mid && next < 200.0);
    }

    #[test]
    fn test_position_never_decreases_while_scrolling_down() {
        let mut scroll = engine(5000.0);
        scroll.wheel(1200.0);
        let mut previous = 0.0;
        for frame in 0..=90 {
            if let Some(position) = scroll.frame(frame as f64 * 16.0) {
                assert!(position >= previous);
                previous = position;
            }
        }
        assert_eq!(previous, 1200.0);
    }

    #[test]
    fn test_disabled_wheel_defers_to_native() {
        let mut scroll = SmoothScroll::new(
            ScrollOptions {
                smooth_wheel: false,
                ..ScrollOptions::default()
            },
            1000.0,
        );
        assert!(!scroll.wheel(120.0));
        assert_eq!(scroll.target(), 0.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_sync_ignored_during_tween() {
        let mut scroll = engine(1000.0);
        scroll.sync(300.0);
        assert_eq!(scroll.position(), 300.0);
        assert_eq!(scroll.target(), 300.0);

        scroll.wheel(50.0);
        scroll.sync(10.0);
        assert_eq!(scroll.position(), 300.0);
        assert_eq!(scroll.target(), 350.0);
    }

    #[test]
    fn test_shrinking_limit_clamps_target() {
        let mut scroll = engine(1000.0);
        scroll.sync(900.0);
        scroll.set_limit(400.0);
        assert_eq!(scroll.target(), 400.0);
        assert_eq!(scroll.position(), 400.0);
    }

    #[test]
    fn test_sync_past_stale_limit_keeps_native_offset() {
        let mut scroll = engine(0.0);
        scroll.sync(2000.0);
        assert_eq!(scroll.position(), 2000.0);
        assert_eq!(scroll.target(), 2000.0);

        scroll.set_limit(5000.0);
        assert!(scroll.wheel(100.0));
        assert_eq!(scroll.target(), 2100.0);
        scroll.frame(0.0);
        assert_eq!(scroll.frame(1250.0), Some(2100.0));
    }

    #[test]
    fn test_shrinking_limit_mid_tween_clamps_landing() {
        let mut scroll = engine(1000.0);
        scroll.wheel(800.0);
        scroll.frame(0.0);
        scroll.frame(100.0);
        scroll.set_limit(300.0);
        assert_eq!(scroll.target(), 300.0);
        assert_eq!(scroll.frame(1500.0), Some(300.0));
    }

    #[test]
    fn test_wheel_delta_normalisation() {
        assert_eq!(normalize_wheel_delta(3.0, DeltaMode::Pixel, 800.0), 3.0);
        assert!((normalize_wheel_delta(3.0, DeltaMode::Line, 800.0) - 50.0).abs() < 1e-9);
        assert_eq!(normalize_wheel_delta(1.0, DeltaMode::Page, 800.0), 800.0);
        assert_eq!(DeltaMode::from_dom(7), DeltaMode::Pixel);
    }
}
