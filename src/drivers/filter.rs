//! Dirt filter capacity sensor.
//!
//! Reports remaining filter headroom as a percentage.  A clean filter reads
//! 100%.

pub struct FilterSensor {
    capacity_percent: f32,
    reads: u32,
}

impl FilterSensor {
    pub fn new() -> Self {
        Self {
            capacity_percent: 100.0,
            reads: 0,
        }
    }

    /// Set the simulated reading.  Values are clamped to 0–100; NaN is kept
    /// so a broken sensor can be modelled.
    pub fn set_capacity(&mut self, percent: f32) {
        self.capacity_percent = if percent.is_nan() {
            percent
        } else {
            percent.clamp(0.0, 100.0)
        };
    }

    pub fn read(&mut self) -> f32 {
        self.reads += 1;
        self.capacity_percent
    }

    /// Number of times the sensor has been sampled.
    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl Default for FilterSensor {
    fn default() -> Self {
        Self::new()
    }
}
