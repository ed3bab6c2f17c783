//! Named curve catalog.
//!
//! A [`Catalog`] maps stable string identifiers to curves, keeps registration
//! order for listing, and answers lookups through a hash index. The
//! process-wide default catalog is built once on first use and is read-only
//! afterwards, so it can be shared across threads without locking.

use std::{collections::HashMap, ops::RangeInclusive, sync::LazyLock};

use log::{debug, trace};

use crate::{
    arch,
    curve::{CurveFamily, Degree, EaseCurve, Evaluator},
    error::{Error, Result},
};

/// Fixed combinator curves, in registration order.
pub const COMBINATORS: [(&str, CurveFamily, fn(f32) -> f32); 5] = [
    ("Arch2", CurveFamily::Arch, arch::arch2),
    ("SmoothStartArch3", CurveFamily::Arch, arch::smooth_start_arch3),
    ("SmoothStopArch3", CurveFamily::Arch, arch::smooth_stop_arch3),
    ("SmoothStepArch4", CurveFamily::Arch, arch::smooth_step_arch4),
    ("BellCurve6", CurveFamily::Bell, arch::bell_curve6),
];

/// Which curves a catalog is populated with.
///
/// Degree ranges are inclusive. Degrees below 2 clamp to 2, so a range that
/// reaches below 2 produces a duplicate identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Degrees registered as `SmoothStart<n>`.
    pub start_degrees: RangeInclusive<u32>,
    /// Degrees registered as `SmoothStop<n>`.
    pub stop_degrees: RangeInclusive<u32>,
    /// Degrees registered as `SmoothStep<n>`.
    pub step_degrees: RangeInclusive<u32>,
    /// Whether to register the fixed arch and bell curves.
    pub combinators: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            start_degrees: 2..=9,
            stop_degrees: 2..=9,
            step_degrees: 2..=9,
            combinators: true,
        }
    }
}

/// Identifier of a degree-generalized curve, e.g. `SmoothStop4`.
pub fn formula_id(family: CurveFamily, degree: Degree) -> String {
    format!("{}{}", family.name(), degree)
}

/// Ordered, uniquely keyed collection of curves.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Entries in registration order.
    entries: Vec<EaseCurve>,
    /// Identifier to position in `entries`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the default population.
    pub fn with_defaults() -> Result<Self> {
        Self::from_config(&CatalogConfig::default())
    }

    /// Build a catalog from `config`.
    ///
    /// Registration order: SmoothStart, SmoothStop, SmoothStep by ascending
    /// degree, then the combinators.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let mut catalog = Self::new();
        let families = [
            (
                CurveFamily::SmoothStart,
                &config.start_degrees,
                Evaluator::SmoothStart as fn(Degree) -> Evaluator,
            ),
            (
                CurveFamily::SmoothStop,
                &config.stop_degrees,
                Evaluator::SmoothStop,
            ),
            (
                CurveFamily::SmoothStep,
                &config.step_degrees,
                Evaluator::SmoothStep,
            ),
        ];
        for (family, degrees, formula) in families {
            for n in degrees.clone() {
                let degree = Degree::new(n);
                catalog.register(formula_id(family, degree), formula(degree), family)?;
            }
        }
        if config.combinators {
            for (id, family, f) in COMBINATORS {
                catalog.register(id, Evaluator::Fixed(f), family)?;
            }
        }
        debug!("built curve catalog with {} entries", catalog.len());
        Ok(catalog)
    }

    /// Add a curve under `id`.
    ///
    /// Fails with [`Error::DuplicateCurveIdentifier`] if `id` is taken; the
    /// catalog is left unchanged in that case.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        evaluator: Evaluator,
        family: CurveFamily,
    ) -> Result<&EaseCurve> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateCurveIdentifier(id));
        }
        trace!("registering curve {id} ({family})");
        let pos = self.entries.len();
        self.index.insert(id.clone(), pos);
        self.entries.push(EaseCurve::new(id, family, evaluator));
        Ok(&self.entries[pos])
    }

    /// The curve registered under `id`, if any.
    pub fn get(&self, id: &str) -> Option<&EaseCurve> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    /// The curve registered under `id`.
    ///
    /// Fails with [`Error::CurveNotFound`] if there is none.
    pub fn lookup(&self, id: &str) -> Result<&EaseCurve> {
        self.get(id).ok_or_else(|| {
            trace!("curve lookup miss: {id}");
            Error::CurveNotFound(id.to_string())
        })
    }

    /// Evaluate the curve `id` at `t`.
    pub fn evaluate(&self, id: &str, t: f32) -> Result<f32> {
        self.lookup(id).map(|curve| curve.eval(t))
    }

    /// All entries in registration order.
    pub fn enumerate(&self) -> &[EaseCurve] {
        &self.entries
    }

    /// Identifiers in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(EaseCurve::id)
    }

    /// Entries of one family in registration order.
    pub fn by_family(&self, family: CurveFamily) -> impl Iterator<Item = &EaseCurve> + '_ {
        self.entries.iter().filter(move |c| c.family() == family)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of registered curves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Process-wide default catalog.
static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::with_defaults().unwrap_or_else(|e| panic!("invalid default curve catalog: {e}"))
});

/// The default catalog, built on first use.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
