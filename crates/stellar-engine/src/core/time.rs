/// Fixed timestep accumulator with a running tick counter.
///
/// The host calls in with variable display-refresh deltas; scene updates
/// run at a fixed logical rate so per-tick rotation increments accumulate
/// the same way regardless of monitor refresh rate.
pub struct FrameClock {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Total ticks executed since startup.
    ticks: u64,
}

impl FrameClock {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed
    /// ticks to run, and counts them as executed.
    /// Capped at 10 ticks per call to prevent spiral of death.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        self.ticks += steps as u64;
        steps
    }

    /// Total ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
