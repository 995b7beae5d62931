/// Parameters for the path engine's derived computations.
///
/// Use `PathOptions::DEFAULT` and override the fields you need.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathOptions {
    /// Target length of the line segments produced when flattening curves.
    ///
    /// Default value: `PathOptions::DEFAULT_FLATTEN_GAP`.
    pub flatten_gap: f64,

    /// Number of chords summed to approximate the length of a cubic curve.
    ///
    /// Default value: `PathOptions::DEFAULT_CURVE_STEPS`.
    pub curve_steps: u32,

    /// Distance between two consecutive offsets tested by the nearest offset search.
    ///
    /// Default value: `PathOptions::DEFAULT_PROGRESS_STEP`.
    pub progress_step: f64,
}

impl PathOptions {
    pub const DEFAULT_FLATTEN_GAP: f64 = 3.0;
    pub const DEFAULT_CURVE_STEPS: u32 = glide_geom::cubic_bezier::DEFAULT_LENGTH_STEPS;
    pub const DEFAULT_PROGRESS_STEP: f64 = 1.0;

    pub const DEFAULT: Self = PathOptions {
        flatten_gap: Self::DEFAULT_FLATTEN_GAP,
        curve_steps: Self::DEFAULT_CURVE_STEPS,
        progress_step: Self::DEFAULT_PROGRESS_STEP,
    };

    #[inline]
    pub const fn flatten_gap(gap: f64) -> Self {
        Self::DEFAULT.with_flatten_gap(gap)
    }

    #[inline]
    pub const fn with_flatten_gap(mut self, gap: f64) -> Self {
        self.flatten_gap = gap;
        self
    }

    #[inline]
    pub const fn with_curve_steps(mut self, steps: u32) -> Self {
        self.curve_steps = steps;
        self
    }

    #[inline]
    pub const fn with_progress_step(mut self, step: f64) -> Self {
        self.progress_step = step;
        self
    }
}

impl Default for PathOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
