//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the default tolerance, iteration limit and
//! precision policy, embedded by every per-method config.
//!
//! [`CommonCfg`] : universal fields
//! ├ `tolerance` : stopping threshold on the per-iteration error (`< tolerance`)
//! ├ `max_iter`  : iteration cap (optional)
//! └ `precision` : [`PrecisionPolicy`] applied to each computed iterate
//!
//! [`impl_common_cfg!`] generates the validated `set_*` builders and public
//! getters on each method config. Methods with extra knobs (bracket
//! validation, fixed-point stopping criterion) add their own setters.

use super::algorithms::Algorithm;
use super::errors::RootFindingError;
use super::precision::PrecisionPolicy;


pub const DEFAULT_TOLERANCE: f64 = 1e-6;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    tolerance: f64,
    max_iter:  Option<usize>,
    precision: PrecisionPolicy,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tolerance : DEFAULT_TOLERANCE,
            max_iter  : None,
            precision : PrecisionPolicy::Full,
        }
    }

    // getters
    pub fn tolerance(&self) -> f64 { self.tolerance }
    pub fn max_iter(&self)  -> Option<usize> { self.max_iter }
    pub fn precision(&self) -> PrecisionPolicy { self.precision }

    // setters (internal)
    pub(crate) fn with_tolerance(&mut self, v: f64)             { self.tolerance = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize)           { self.max_iter  = Some(v); }
    pub(crate) fn with_precision(&mut self, v: PrecisionPolicy) { self.precision = v; }

    /// Iteration cap for `algorithm`: the explicit `max_iter` if set,
    /// otherwise [`Algorithm::default_max_iter`].
    pub(crate) fn resolve_max_iter(&self, algorithm: Algorithm) -> Result<usize, RootFindingError> {
        match self.max_iter {
            // unreachable through the setters
            Some(0) => Err(RootFindingError::InvalidMaxIter { got: 0 }),
            Some(n) => Ok(n),
            None    => Ok(algorithm.default_max_iter()),
        }
    }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tolerance(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidTolerance { got: v }
                    );
                }
                self.common.with_tolerance(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }
            #[must_use]
            pub fn set_precision(
                mut self, v: $crate::root_finding::precision::PrecisionPolicy
            ) -> Self {
                self.common.with_precision(v);
                self
            }

            #[inline] #[must_use] pub fn tolerance(&self) -> f64 { self.common.tolerance() }
            #[inline] #[must_use] pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
            #[inline] #[must_use]
            pub fn precision(&self) -> $crate::root_finding::precision::PrecisionPolicy {
                self.common.precision()
            }
        }

        impl Default for $cfg {
            fn default() -> Self { Self::new() }
        }
    };
}
pub(crate) use impl_common_cfg;
