use std::{fmt, str::FromStr};

use crate::formula;

/// Shape classification attached to every catalog entry.
///
/// Used for documentation and selection only; evaluation never looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveFamily {
    /// Zero slope at `t = 0`.
    SmoothStart,
    /// Zero slope at `t = 1`.
    SmoothStop,
    /// Zero slope at both ends.
    SmoothStep,
    /// Rises from 0 and returns to 0.
    Arch,
    /// A narrower arch built as a product of arches.
    Bell,
}

impl CurveFamily {
    /// Every family, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::SmoothStart,
        Self::SmoothStop,
        Self::SmoothStep,
        Self::Arch,
        Self::Bell,
    ];

    /// Display name, also the identifier prefix of degree-generalized curves.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SmoothStart => "SmoothStart",
            Self::SmoothStop => "SmoothStop",
            Self::SmoothStep => "SmoothStep",
            Self::Arch => "Arch",
            Self::Bell => "Bell",
        }
    }
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveFamily {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|f| f.name()).collect();
                format!(
                    "unknown curve family '{value}'. Valid options: {}",
                    names.join(", ")
                )
            })
    }
}

/// Integer exponent of a SmoothStart/SmoothStop/SmoothStep curve.
///
/// Always at least [`Degree::MIN`]; smaller requests are clamped up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Degree(u32);

impl Degree {
    /// Smallest supported degree.
    pub const MIN: Self = Self(2);

    /// Build a degree, clamping values below 2 up to 2.
    pub const fn new(degree: u32) -> Self {
        if degree < Self::MIN.0 {
            Self::MIN
        } else {
            Self(degree)
        }
    }

    /// The degree as an integer.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The degree as an exponent for `powi`.
    pub fn exponent(self) -> i32 {
        i32::try_from(self.0).unwrap_or(i32::MAX)
    }
}

impl From<u32> for Degree {
    fn from(degree: u32) -> Self {
        Self::new(degree)
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The callable stored in a catalog entry.
#[derive(Clone, Copy, Debug)]
pub enum Evaluator {
    /// `t^n`.
    SmoothStart(Degree),
    /// `1 - (1 - t)^n`.
    SmoothStop(Degree),
    /// Crossfade from SmoothStart to SmoothStop of the same degree.
    SmoothStep(Degree),
    /// A fixed, non-parameterized shape.
    Fixed(fn(f32) -> f32),
}

impl Evaluator {
    /// Evaluate at `t`.
    #[inline]
    pub fn eval(&self, t: f32) -> f32 {
        match *self {
            Self::SmoothStart(degree) => formula::smooth_start(degree, t),
            Self::SmoothStop(degree) => formula::smooth_stop(degree, t),
            Self::SmoothStep(degree) => formula::smooth_step(degree, t),
            Self::Fixed(f) => f(t),
        }
    }

    /// Degree of a formula evaluator, `None` for fixed shapes.
    pub const fn degree(&self) -> Option<Degree> {
        match *self {
            Self::SmoothStart(degree) | Self::SmoothStop(degree) | Self::SmoothStep(degree) => {
                Some(degree)
            }
            Self::Fixed(_) => None,
        }
    }
}

impl From<fn(f32) -> f32> for Evaluator {
    fn from(f: fn(f32) -> f32) -> Self {
        Self::Fixed(f)
    }
}

/// A named easing curve.
#[derive(Clone, Debug)]
pub struct EaseCurve {
    /// Unique identifier within its catalog.
    id: String,
    /// Classification tag.
    family: CurveFamily,
    /// The function behind the name.
    evaluator: Evaluator,
}

impl EaseCurve {
    /// Build an entry. Uniqueness of `id` is enforced by the catalog.
    pub fn new(id: impl Into<String>, family: CurveFamily, evaluator: Evaluator) -> Self {
        Self {
            id: id.into(),
            family,
            evaluator,
        }
    }

    /// Identifier, e.g. `SmoothStart3`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Classification tag.
    pub fn family(&self) -> CurveFamily {
        self.family
    }

    /// Degree for degree-generalized curves.
    pub fn degree(&self) -> Option<Degree> {
        self.evaluator.degree()
    }

    /// The underlying evaluator.
    pub fn evaluator(&self) -> Evaluator {
        self.evaluator
    }

    /// Evaluate the curve at `t`.
    #[inline]
    pub fn eval(&self, t: f32) -> f32 {
        self.evaluator.eval(t)
    }

    /// `steps + 1` evenly spaced `(t, f(t))` pairs covering `[0, 1]`.
    ///
    /// Zero steps yields the single pair at `t = 0`.
    pub fn sample(&self, steps: u32) -> impl Iterator<Item = (f32, f32)> + '_ {
        (0..=steps).map(move |i| {
            let t = if steps == 0 {
                0.0
            } else {
                i as f32 / steps as f32
            };
            (t, self.eval(t))
        })
    }
}
