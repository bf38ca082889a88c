use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BIAS_LEVEL, PARAM_MAX, PARAM_MIN};
use crate::errors::{InertiaError, InertiaResult};

use super::continuous::ContinuousParameters;

/// Integer-scale bias profile of a decision agent. Every field is in [0, 10].
///
/// Build with [`AgentParameters::builder`]; out-of-range values are rejected
/// with [`InertiaError::InvalidParameter`] naming the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAgentParameters")]
pub struct AgentParameters {
    procrastination: u8,
    pessimism: u8,
    loss_aversion: u8,
    scarcity: u8,
    avoidance: u8,
    pressure: u8,
    invisibilisation: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    visibility_of_backstage: Option<u8>,
}

impl AgentParameters {
    pub fn builder() -> AgentParametersBuilder {
        AgentParametersBuilder::default()
    }

    /// Every bias at `level`, no backstage visibility.
    pub fn uniform(level: i32) -> InertiaResult<Self> {
        Self::builder()
            .procrastination(level)
            .pessimism(level)
            .loss_aversion(level)
            .scarcity(level)
            .avoidance(level)
            .pressure(level)
            .invisibilisation(level)
            .build()
    }

    pub fn procrastination(&self) -> u8 {
        self.procrastination
    }

    pub fn pessimism(&self) -> u8 {
        self.pessimism
    }

    pub fn loss_aversion(&self) -> u8 {
        self.loss_aversion
    }

    pub fn scarcity(&self) -> u8 {
        self.scarcity
    }

    pub fn avoidance(&self) -> u8 {
        self.avoidance
    }

    pub fn pressure(&self) -> u8 {
        self.pressure
    }

    pub fn invisibilisation(&self) -> u8 {
        self.invisibilisation
    }

    /// Transparency of the decision's backstage, if the caller supplied one.
    pub fn visibility_of_backstage(&self) -> Option<u8> {
        self.visibility_of_backstage
    }

    /// Map onto the [0, 1] scale used by the weighted-average score.
    ///
    /// Avoidance has no axis on the continuous scale and is dropped.
    pub fn to_continuous(&self) -> ContinuousParameters {
        let scale = |v: u8| f64::from(v) / f64::from(PARAM_MAX);
        ContinuousParameters::from_validated(
            scale(self.pessimism),
            scale(self.procrastination),
            scale(self.loss_aversion),
            scale(self.scarcity),
            scale(self.pressure),
            scale(self.invisibilisation),
        )
    }
}

impl Default for AgentParameters {
    fn default() -> Self {
        Self {
            procrastination: DEFAULT_BIAS_LEVEL,
            pessimism: DEFAULT_BIAS_LEVEL,
            loss_aversion: DEFAULT_BIAS_LEVEL,
            scarcity: DEFAULT_BIAS_LEVEL,
            avoidance: DEFAULT_BIAS_LEVEL,
            pressure: DEFAULT_BIAS_LEVEL,
            invisibilisation: DEFAULT_BIAS_LEVEL,
            visibility_of_backstage: None,
        }
    }
}

/// Unvalidated input. Also the wire shape for serde.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawAgentParameters {
    procrastination: i32,
    pessimism: i32,
    loss_aversion: i32,
    scarcity: i32,
    avoidance: i32,
    pressure: i32,
    invisibilisation: i32,
    #[serde(default)]
    visibility_of_backstage: Option<i32>,
}

impl TryFrom<RawAgentParameters> for AgentParameters {
    type Error = InertiaError;

    fn try_from(raw: RawAgentParameters) -> InertiaResult<Self> {
        Ok(Self {
            procrastination: check_level("procrastination", raw.procrastination)?,
            pessimism: check_level("pessimism", raw.pessimism)?,
            loss_aversion: check_level("loss_aversion", raw.loss_aversion)?,
            scarcity: check_level("scarcity", raw.scarcity)?,
            avoidance: check_level("avoidance", raw.avoidance)?,
            pressure: check_level("pressure", raw.pressure)?,
            invisibilisation: check_level("invisibilisation", raw.invisibilisation)?,
            visibility_of_backstage: raw
                .visibility_of_backstage
                .map(|v| check_level("visibility_of_backstage", v))
                .transpose()?,
        })
    }
}

fn check_level(field: &'static str, value: i32) -> InertiaResult<u8> {
    if (PARAM_MIN..=PARAM_MAX).contains(&value) {
        Ok(value as u8)
    } else {
        Err(InertiaError::InvalidParameter {
            field,
            value: f64::from(value),
            min: f64::from(PARAM_MIN),
            max: f64::from(PARAM_MAX),
        })
    }
}

/// Builder for [`AgentParameters`]. Unset biases default to 5.
#[derive(Debug, Clone, Copy)]
pub struct AgentParametersBuilder {
    raw: RawAgentParameters,
}

impl Default for AgentParametersBuilder {
    fn default() -> Self {
        let level = i32::from(DEFAULT_BIAS_LEVEL);
        Self {
            raw: RawAgentParameters {
                procrastination: level,
                pessimism: level,
                loss_aversion: level,
                scarcity: level,
                avoidance: level,
                pressure: level,
                invisibilisation: level,
                visibility_of_backstage: None,
            },
        }
    }
}

impl AgentParametersBuilder {
    pub fn procrastination(mut self, value: i32) -> Self {
        self.raw.procrastination = value;
        self
    }

    pub fn pessimism(mut self, value: i32) -> Self {
        self.raw.pessimism = value;
        self
    }

    pub fn loss_aversion(mut self, value: i32) -> Self {
        self.raw.loss_aversion = value;
        self
    }

    pub fn scarcity(mut self, value: i32) -> Self {
        self.raw.scarcity = value;
        self
    }

    pub fn avoidance(mut self, value: i32) -> Self {
        self.raw.avoidance = value;
        self
    }

    pub fn pressure(mut self, value: i32) -> Self {
        self.raw.pressure = value;
        self
    }

    pub fn invisibilisation(mut self, value: i32) -> Self {
        self.raw.invisibilisation = value;
        self
    }

    pub fn visibility_of_backstage(mut self, value: i32) -> Self {
        self.raw.visibility_of_backstage = Some(value);
        self
    }

    /// Validate every field and freeze the profile.
    pub fn build(self) -> InertiaResult<AgentParameters> {
        AgentParameters::try_from(self.raw)
    }
}
