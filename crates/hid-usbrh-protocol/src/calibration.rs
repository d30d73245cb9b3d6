//! SHT1x calibration
//!
//! Coefficient values are verbatim from the Sensirion SHT1x datasheet
//! (V5), for 5V supply, 14-bit temperature and 12-bit humidity readout.
//! Single-precision math throughout; the datasheet's precision loss is
//! accepted, the constants are not to be "improved".

use super::SensorReading;

// Temperature: T = D1 + D2 * SO_T
const D1: f32 = -40.1;
const D2: f32 = 0.01;

// Humidity: RH_linear = C1 + C2 * SO_RH + C3 * SO_RH^2
const C1: f32 = -2.0468;
const C2: f32 = 0.0367;
const C3: f32 = -0.000_001_595_5;

// Temperature compensation: RH_true = (T - 25) * (T1 + T2 * SO_RH) + RH_linear
const T1: f32 = 0.01;
const T2: f32 = 0.000_08;

/// Physically meaningful relative-humidity range, %RH.
pub const HUMIDITY_MIN_PCT: f32 = 0.1;
pub const HUMIDITY_MAX_PCT: f32 = 100.0;

impl SensorReading {
    /// Temperature in degrees Celsius. Linear in the raw code, unclamped.
    pub fn temperature_celsius(&self) -> f32 {
        D1 + D2 * f32::from(self.raw_temperature_code())
    }

    /// First calibration stage: relative humidity from the raw code alone,
    /// before temperature compensation. Unclamped; exposed so both stages
    /// stay independently testable.
    pub fn linear_humidity_pct(&self) -> f32 {
        let so_rh = f32::from(self.raw_humidity_code());
        C1 + C2 * so_rh + C3 * so_rh * so_rh
    }

    /// Relative humidity in %RH: the temperature-compensated value,
    /// clamped into `[HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT]`.
    ///
    /// This deliberately returns the compensated result rather than the
    /// intermediate linear stage; callers who want the uncompensated value
    /// use [`SensorReading::linear_humidity_pct`].
    pub fn relative_humidity_pct(&self) -> f32 {
        let so_rh = f32::from(self.raw_humidity_code());
        let t_c = self.temperature_celsius();
        let rh_true = (t_c - 25.0) * (T1 + T2 * so_rh) + self.linear_humidity_pct();
        rh_true.clamp(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT)
    }
}
