use serde::{Deserialize, Serialize};

use crate::constants::{CONTINUOUS_MAX, CONTINUOUS_MIN};
use crate::errors::{InertiaError, InertiaResult};

/// Continuous-scale bias profile in [0, 1], consumed by the weighted-average score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawContinuousParameters")]
pub struct ContinuousParameters {
    pessimism: f64,
    procrastination: f64,
    loss_aversion: f64,
    scarcity: f64,
    pressure: f64,
    invisibilisation: f64,
}

impl ContinuousParameters {
    pub fn builder() -> ContinuousParametersBuilder {
        ContinuousParametersBuilder::default()
    }

    /// Caller guarantees every value is already in range.
    pub(crate) fn from_validated(
        pessimism: f64,
        procrastination: f64,
        loss_aversion: f64,
        scarcity: f64,
        pressure: f64,
        invisibilisation: f64,
    ) -> Self {
        Self {
            pessimism,
            procrastination,
            loss_aversion,
            scarcity,
            pressure,
            invisibilisation,
        }
    }

    pub fn pessimism(&self) -> f64 {
        self.pessimism
    }

    pub fn procrastination(&self) -> f64 {
        self.procrastination
    }

    pub fn loss_aversion(&self) -> f64 {
        self.loss_aversion
    }

    pub fn scarcity(&self) -> f64 {
        self.scarcity
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    pub fn invisibilisation(&self) -> f64 {
        self.invisibilisation
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct RawContinuousParameters {
    pessimism: f64,
    procrastination: f64,
    loss_aversion: f64,
    scarcity: f64,
    pressure: f64,
    invisibilisation: f64,
}

impl TryFrom<RawContinuousParameters> for ContinuousParameters {
    type Error = InertiaError;

    fn try_from(raw: RawContinuousParameters) -> InertiaResult<Self> {
        Ok(Self {
            pessimism: check_unit("pessimism", raw.pessimism)?,
            procrastination: check_unit("procrastination", raw.procrastination)?,
            loss_aversion: check_unit("loss_aversion", raw.loss_aversion)?,
            scarcity: check_unit("scarcity", raw.scarcity)?,
            pressure: check_unit("pressure", raw.pressure)?,
            invisibilisation: check_unit("invisibilisation", raw.invisibilisation)?,
        })
    }
}

// NaN fails the range check.
fn check_unit(field: &'static str, value: f64) -> InertiaResult<f64> {
    if (CONTINUOUS_MIN..=CONTINUOUS_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(InertiaError::InvalidParameter {
            field,
            value,
            min: CONTINUOUS_MIN,
            max: CONTINUOUS_MAX,
        })
    }
}

/// Builder for [`ContinuousParameters`]. Unset fields default to 0.5.
#[derive(Debug, Clone, Copy)]
pub struct ContinuousParametersBuilder {
    raw: RawContinuousParameters,
}

impl Default for ContinuousParametersBuilder {
    fn default() -> Self {
        Self {
            raw: RawContinuousParameters {
                pessimism: 0.5,
                procrastination: 0.5,
                loss_aversion: 0.5,
                scarcity: 0.5,
                pressure: 0.5,
                invisibilisation: 0.5,
            },
        }
    }
}

impl ContinuousParametersBuilder {
    pub fn pessimism(mut self, value: f64) -> Self {
        self.raw.pessimism = value;
        self
    }

    pub fn procrastination(mut self, value: f64) -> Self {
        self.raw.procrastination = value;
        self
    }

    pub fn loss_aversion(mut self, value: f64) -> Self {
        self.raw.loss_aversion = value;
        self
    }

    pub fn scarcity(mut self, value: f64) -> Self {
        self.raw.scarcity = value;
        self
    }

    pub fn pressure(mut self, value: f64) -> Self {
        self.raw.pressure = value;
        self
    }

    pub fn invisibilisation(mut self, value: f64) -> Self {
        self.raw.invisibilisation = value;
        self
    }

    pub fn build(self) -> InertiaResult<ContinuousParameters> {
        ContinuousParameters::try_from(self.raw)
    }
}
