//! Input shapes accepted at the API boundary
//!
//! Callers may hand over a bare line geometry or a feature wrapping one, and may
//! select units either through structured options or with a bare unit string.
//! Both unions are resolved here, once, into a [`GeoPath`] and an [`AlongOptions`];
//! the traversal never sees anything else.

use crate::{AlongError, GeoPath, Result, Units};
use geo::Geometry;
use std::collections::BTreeMap;

/// A feature: a geometry plus free-form properties
///
/// Properties are carried for the caller's convenience only; results are never
/// re-wrapped in them.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Feature {
    pub geometry: Option<Geometry<f64>>,
    pub properties: BTreeMap<String, String>,
}

impl Feature {
    /// Create a feature around a geometry, without properties
    pub fn new(geometry: impl Into<Geometry<f64>>) -> Self {
        Self {
            geometry: Some(geometry.into()),
            properties: BTreeMap::new(),
        }
    }

    /// Add a property, builder style
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A line as accepted by [`crate::along`]: either a geometry or a feature holding one
#[derive(Clone, Debug, PartialEq)]
pub enum LineInput {
    Geometry(Geometry<f64>),
    Feature(Feature),
}

impl From<Geometry<f64>> for LineInput {
    fn from(geometry: Geometry<f64>) -> Self {
        LineInput::Geometry(geometry)
    }
}

impl From<geo::LineString<f64>> for LineInput {
    fn from(line: geo::LineString<f64>) -> Self {
        LineInput::Geometry(Geometry::LineString(line))
    }
}

impl From<Feature> for LineInput {
    fn from(feature: Feature) -> Self {
        LineInput::Feature(feature)
    }
}

/// Name of a geometry variant, as reported in errors
fn geometry_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

fn geometry_to_path(geometry: Geometry<f64>) -> Result<GeoPath> {
    match geometry {
        Geometry::LineString(line) => GeoPath::try_from(line),
        other => Err(AlongError::UnsupportedGeometry(geometry_name(&other))),
    }
}

impl TryFrom<LineInput> for GeoPath {
    type Error = AlongError;

    fn try_from(input: LineInput) -> Result<Self> {
        match input {
            LineInput::Geometry(geometry) => geometry_to_path(geometry),
            LineInput::Feature(Feature {
                geometry: Some(geometry),
                ..
            }) => geometry_to_path(geometry),
            LineInput::Feature(Feature { geometry: None, .. }) => {
                Err(AlongError::UnsupportedGeometry("null"))
            }
        }
    }
}

/// Options for a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AlongOptions {
    /// Unit for the requested distance and every accumulated length (default: kilometers)
    pub units: Units,
}

impl From<Units> for AlongOptions {
    fn from(units: Units) -> Self {
        Self { units }
    }
}

/// Options as accepted by [`crate::along`]
///
/// The bare string form names the units directly and exists for callers that
/// predate structured options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OptionsInput {
    #[default]
    Default,
    Bare(String),
    Options(AlongOptions),
}

impl From<&str> for OptionsInput {
    fn from(units: &str) -> Self {
        OptionsInput::Bare(units.to_string())
    }
}

impl From<String> for OptionsInput {
    fn from(units: String) -> Self {
        OptionsInput::Bare(units)
    }
}

impl From<AlongOptions> for OptionsInput {
    fn from(options: AlongOptions) -> Self {
        OptionsInput::Options(options)
    }
}

impl From<Units> for OptionsInput {
    fn from(units: Units) -> Self {
        OptionsInput::Options(units.into())
    }
}

impl<T: Into<OptionsInput>> From<Option<T>> for OptionsInput {
    fn from(options: Option<T>) -> Self {
        options.map_or(OptionsInput::Default, Into::into)
    }
}

impl TryFrom<OptionsInput> for AlongOptions {
    type Error = AlongError;

    fn try_from(input: OptionsInput) -> Result<Self> {
        match input {
            OptionsInput::Default => Ok(AlongOptions::default()),
            OptionsInput::Bare(units) => Ok(units.parse::<Units>()?.into()),
            OptionsInput::Options(options) => Ok(options),
        }
    }
}
