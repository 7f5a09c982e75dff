/// Running keep/skip threshold for uniform sampling.
///
/// The threshold is carried as a real number and only ever advanced by
/// `frame_interval`, so rounding never accumulates across kept frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingState {
    next_eligible: f64,
    frame_interval: f64,
}

impl SamplingState {
    /// Interval is `source_fps / target_fps`, or `source_fps` when the target
    /// is not positive.
    pub fn new(source_fps: f64, target_fps: f64) -> Self {
        let frame_interval = if target_fps > 0.0 {
            source_fps / target_fps
        } else {
            source_fps
        };
        Self::with_interval(frame_interval)
    }

    pub fn with_interval(frame_interval: f64) -> Self {
        Self {
            next_eligible: 0.0,
            frame_interval,
        }
    }

    pub fn next_eligible(&self) -> f64 {
        self.next_eligible
    }

    pub fn frame_interval(&self) -> f64 {
        self.frame_interval
    }

    /// Pure decision: whether `index` is kept, and the state after deciding.
    pub fn decide(self, index: u64) -> (bool, SamplingState) {
        if index as f64 >= self.next_eligible {
            let advanced = SamplingState {
                next_eligible: self.next_eligible + self.frame_interval,
                ..self
            };
            (true, advanced)
        } else {
            (false, self)
        }
    }

    /// In-place form of [`SamplingState::decide`] for the run loop.
    pub fn should_keep(&mut self, index: u64) -> bool {
        let (keep, next) = self.decide(index);
        *self = next;
        keep
    }

    /// Indices kept out of `0..total`, in order.
    pub fn kept_indices(mut self, total: u64) -> impl Iterator<Item = u64> {
        (0..total).filter(move |&index| self.should_keep(index))
    }
}
