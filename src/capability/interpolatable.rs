//! Epoch and interpolation algorithm for time-tagged samples.

use crate::core::{BuildsCapability, Capability, CapabilityFields, Fields, HasCapability, TimeValue};
use crate::enums::InterpolationAlgorithm;
use crate::util::{Error, Result, Settings};

const EPOCH_KEY: &str = "epoch";
const ALGORITHM_KEY: &str = "interpolationAlgorithm";

/// A property whose value may be determined by interpolating over
/// time-tagged samples.
///
/// The algorithm defaults to [`InterpolationAlgorithm::Linear`] and is only
/// written when set explicitly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interpolatable {
    epoch: Option<TimeValue>,
    interpolation_algorithm: Option<InterpolationAlgorithm>,
}

impl Interpolatable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epoch(mut self, epoch: impl Into<TimeValue>) -> Self {
        self.epoch = Some(epoch.into());
        self
    }

    pub fn with_interpolation_algorithm(mut self, algorithm: InterpolationAlgorithm) -> Self {
        self.interpolation_algorithm = Some(algorithm);
        self
    }

    /// The epoch for times given as seconds since an epoch.
    pub fn epoch(&self) -> Option<&TimeValue> {
        self.epoch.as_ref()
    }

    /// The effective algorithm, explicit or default.
    pub fn interpolation_algorithm(&self) -> InterpolationAlgorithm {
        self.interpolation_algorithm.unwrap_or_default()
    }

    /// The algorithm only if it was set explicitly.
    pub fn explicit_interpolation_algorithm(&self) -> Option<InterpolationAlgorithm> {
        self.interpolation_algorithm
    }
}

impl CapabilityFields for Interpolatable {
    fn write_fields(&self, fields: &mut Fields, settings: &Settings) {
        fields.push_opt(EPOCH_KEY, self.epoch.as_ref(), settings);
        fields.push_opt(ALGORITHM_KEY, self.interpolation_algorithm.as_ref(), settings);
    }

    fn validate(&self) -> Result<()> {
        match &self.epoch {
            Some(epoch) if !epoch.is_finite() => {
                tracing::debug!(?epoch, "rejecting non-finite epoch");
                Err(Error::NonFiniteNumber { field: EPOCH_KEY })
            }
            _ => Ok(()),
        }
    }
}

impl Capability for Interpolatable {
    const NAME: &'static str = "Interpolatable";
    const KNOWN_PROPERTIES: &'static [&'static str] = &[EPOCH_KEY, ALGORITHM_KEY];
}

/// `epoch` / `interpolationAlgorithm` accessors for composites holding an
/// [`Interpolatable`].
pub trait InterpolatableProperty {
    fn epoch(&self) -> Option<&TimeValue>;
    fn interpolation_algorithm(&self) -> InterpolationAlgorithm;
}

impl<T: HasCapability<Interpolatable>> InterpolatableProperty for T {
    fn epoch(&self) -> Option<&TimeValue> {
        HasCapability::<Interpolatable>::capability(self).epoch()
    }

    fn interpolation_algorithm(&self) -> InterpolationAlgorithm {
        HasCapability::<Interpolatable>::capability(self).interpolation_algorithm()
    }
}

/// `epoch` / `interpolationAlgorithm` inputs for builders.
pub trait InterpolatableBuilder: Sized {
    fn epoch(self, epoch: impl Into<TimeValue>) -> Self;
    fn interpolation_algorithm(self, algorithm: InterpolationAlgorithm) -> Self;
}

impl<T: BuildsCapability<Interpolatable>> InterpolatableBuilder for T {
    fn epoch(mut self, epoch: impl Into<TimeValue>) -> Self {
        self.capability_mut().epoch = Some(epoch.into());
        self
    }

    fn interpolation_algorithm(mut self, algorithm: InterpolationAlgorithm) -> Self {
        self.capability_mut().interpolation_algorithm = Some(algorithm);
        self
    }
}
