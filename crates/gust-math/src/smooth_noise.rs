use crate::error::{MathError, MathResult};

/// Strategy producing the next target of a [`SmoothNoise`] track.
///
/// `C` is a caller supplied context threaded through every tick, so a
/// strategy can depend on state owned elsewhere (an RNG, the active wind
/// regime) without the noise track holding a reference to it.
pub trait Resample<C: ?Sized> {
    /// Produce the next target given the target that is being retired.
    fn resample(&mut self, previous: f32, ctx: &mut C) -> f32;
}

impl<C: ?Sized, F> Resample<C> for F
where
    F: FnMut(f32, &mut C) -> f32,
{
    fn resample(&mut self, previous: f32, ctx: &mut C) -> f32 {
        self(previous, ctx)
    }
}

/// A signal that picks a new target every `period` ticks and linearly
/// interpolates towards it in between.
///
/// The interpolation always starts from the target that was just retired,
/// so the signal has no jumps at resample boundaries.
#[derive(Debug, Clone)]
pub struct SmoothNoise<F> {
    period: u32,
    previous_target: f32,
    current_target: f32,
    ticks_until_resample: u32,
    resample: F,
}

impl<F> SmoothNoise<F> {
    /// Create a track holding `initial_target`; the first tick resamples.
    pub fn new(period: u32, initial_target: f32, resample: F) -> MathResult<Self> {
        if period == 0 {
            return Err(MathError::ZeroPeriod);
        }
        Ok(Self {
            period,
            previous_target: initial_target,
            current_target: initial_target,
            ticks_until_resample: 0,
            resample,
        })
    }

    /// Advance one tick, resampling when the current period has run out.
    pub fn tick<C: ?Sized>(&mut self, ctx: &mut C)
    where
        F: Resample<C>,
    {
        if self.ticks_until_resample == 0 {
            self.previous_target = self.current_target;
            self.current_target = self.resample.resample(self.previous_target, ctx);
            self.ticks_until_resample = self.period - 1;
            tracing::trace!(
                from = self.previous_target,
                to = self.current_target,
                period = self.period,
                "noise resampled"
            );
        } else {
            self.ticks_until_resample -= 1;
        }
    }

    /// Restart the track at `initial_target`, as if freshly constructed.
    pub fn reset(&mut self, initial_target: f32) {
        self.previous_target = initial_target;
        self.current_target = initial_target;
        self.ticks_until_resample = 0;
    }

    /// Interpolation fraction within the current period, in `(0, 1]`.
    pub fn lerp(&self) -> f32 {
        1.0 - self.ticks_until_resample as f32 / self.period as f32
    }

    /// Current interpolated value between the previous and current targets.
    pub fn noise(&self) -> f32 {
        let t = self.lerp();
        self.previous_target + (self.current_target - self.previous_target) * t
    }

    /// Number of ticks between resamples.
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Target the current period interpolates from.
    pub fn previous_target(&self) -> f32 {
        self.previous_target
    }

    /// Target the current period interpolates towards.
    pub fn current_target(&self) -> f32 {
        self.current_target
    }

    /// Ticks left before the next resample.
    pub fn ticks_until_resample(&self) -> u32 {
        self.ticks_until_resample
    }
}
