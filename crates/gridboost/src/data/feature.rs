//! Feature extractors.
//!
//! A [`Feature`] maps an observation to a real number. The learners never look
//! inside an observation; every split decision goes through a feature.
//!
//! Anything callable as `Fn(&O) -> f64` is a feature, so most callers just pass
//! closures or function pointers. [`NamedFeature`] attaches a display name,
//! which shows up in training logs and tree introspection, and erases the
//! closure type so heterogeneous features fit in one `Vec`.

use std::fmt;
use std::sync::Arc;

/// A pure numeric extractor over observations of type `O`.
///
/// Implementations must be deterministic and total over every observation a
/// learner is given.
pub trait Feature<O: ?Sized> {
    /// Evaluate the feature on one observation.
    fn value(&self, observation: &O) -> f64;

    /// Human-readable name, if the feature has one.
    fn name(&self) -> Option<&str> {
        None
    }
}

impl<O: ?Sized, F> Feature<O> for F
where
    F: Fn(&O) -> f64,
{
    #[inline]
    fn value(&self, observation: &O) -> f64 {
        self(observation)
    }
}

// =============================================================================
// NamedFeature
// =============================================================================

/// A feature with a name.
///
/// Cloning is cheap: the extractor is reference counted.
///
/// # Example
///
/// ```
/// use gridboost::data::{Feature, NamedFeature};
///
/// struct House { rooms: u32, area: f64 }
///
/// let features = vec![
///     NamedFeature::new("rooms", |h: &House| h.rooms as f64),
///     NamedFeature::new("area", |h: &House| h.area),
/// ];
///
/// let house = House { rooms: 3, area: 82.5 };
/// assert_eq!(features[1].value(&house), 82.5);
/// assert_eq!(features[0].name(), Some("rooms"));
/// ```
pub struct NamedFeature<O: ?Sized> {
    name: Arc<str>,
    extract: Arc<dyn Fn(&O) -> f64 + Send + Sync>,
}

impl<O: ?Sized> NamedFeature<O> {
    /// Wrap an extractor under the given name.
    pub fn new(name: impl Into<Arc<str>>, extract: impl Fn(&O) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            extract: Arc::new(extract),
        }
    }
}

impl<O: ?Sized> Feature<O> for NamedFeature<O> {
    #[inline]
    fn value(&self, observation: &O) -> f64 {
        (self.extract)(observation)
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl<O: ?Sized> Clone for NamedFeature<O> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<O: ?Sized> fmt::Debug for NamedFeature<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedFeature").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Display label for feature `index`: its name, or `f{index}` for anonymous features.
pub(crate) fn feature_label<O: ?Sized, F: Feature<O>>(features: &[F], index: usize) -> String {
    features
        .get(index)
        .and_then(|f| f.name())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("f{index}"))
}
