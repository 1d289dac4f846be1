//! Host parameter interface.
//!
//! The generators publish their tunable parameters as declaration tables
//! (name, type, display caption, initial value) and accept a plain
//! name-to-number mapping back from whatever host collected the input.
//! Width and height arrive in inches and are converted to millimeters at
//! this boundary; thickness is already millimeters.

use crate::errors::ParamError;
use crate::float_types::{Real, inches_to_mm};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Float,
    Int,
}

/// One declared parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamDef {
    pub name: &'static str,
    pub kind: ParamKind,
    pub caption: &'static str,
    pub initial: Real,
}

pub const LETTERED_PANEL_PARAMS: &[ParamDef] = &[
    ParamDef {
        name: "width",
        kind: ParamKind::Float,
        caption: "Width (inches)",
        initial: 10.0,
    },
    ParamDef {
        name: "height",
        kind: ParamKind::Float,
        caption: "Height (inches)",
        initial: 7.0,
    },
    ParamDef {
        name: "thickness",
        kind: ParamKind::Float,
        caption: "Thickness (millimeters)",
        initial: 1.0,
    },
    ParamDef {
        name: "letteredSlotsPerRow",
        kind: ParamKind::Int,
        caption: "Small slots per row",
        initial: 13.0,
    },
    ParamDef {
        name: "sideColumnRows",
        kind: ParamKind::Int,
        caption: "Total rows in side columns",
        initial: 3.0,
    },
    ParamDef {
        name: "sideColumnSplitRows",
        kind: ParamKind::Int,
        caption: "Split rows in side columns",
        initial: 1.0,
    },
];

pub const BEAD_PANEL_PARAMS: &[ParamDef] = &[
    ParamDef {
        name: "width",
        kind: ParamKind::Float,
        caption: "Width (inches)",
        initial: 10.0,
    },
    ParamDef {
        name: "height",
        kind: ParamKind::Float,
        caption: "Height (inches)",
        initial: 7.0,
    },
    ParamDef {
        name: "thickness",
        kind: ParamKind::Float,
        caption: "Thickness (millimeters)",
        initial: 1.0,
    },
    ParamDef {
        name: "slotsPerRow",
        kind: ParamKind::Int,
        caption: "Slots per row",
        initial: 13.0,
    },
];

/// Name-to-value mapping as delivered by the host.
#[derive(Debug, Clone, Default)]
pub struct ParamValues(BTreeMap<String, Real>);

impl ParamValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: Real) -> &mut Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<Real> {
        self.0.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Keep only the values a definition table declares.
    pub fn filtered(&self, defs: &[ParamDef]) -> ParamValues {
        let kept = self
            .0
            .iter()
            .filter(|(name, _)| defs.iter().any(|def| def.name == name.as_str()))
            .map(|(name, value)| (name.clone(), *value))
            .collect();
        ParamValues(kept)
    }
}

/// Fill a definition table from host values: missing names take their
/// initial value, unknown names are rejected, int parameters must be whole
/// numbers.
fn resolve(
    defs: &'static [ParamDef],
    values: &ParamValues,
) -> Result<BTreeMap<&'static str, Real>, ParamError> {
    for name in values.names() {
        if !defs.iter().any(|def| def.name == name) {
            return Err(ParamError::UnknownParameter {
                name: name.to_owned(),
            });
        }
    }
    let mut resolved = BTreeMap::new();
    for def in defs {
        let value = values.get(def.name).unwrap_or(def.initial);
        if !value.is_finite() {
            return Err(ParamError::NonFiniteValue { name: def.name });
        }
        if def.kind == ParamKind::Int && value.fract() != 0.0 {
            return Err(ParamError::NotAnInteger {
                name: def.name,
                value,
            });
        }
        resolved.insert(def.name, value);
    }
    Ok(resolved)
}

fn count(resolved: &BTreeMap<&'static str, Real>, name: &'static str) -> Result<u32, ParamError> {
    let value = resolved[name];
    if value < 0.0 || value > u32::MAX as Real {
        return Err(ParamError::OutOfRange { name, value });
    }
    Ok(value as u32)
}

/// Resolved input for the lettered panel, in internal units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetteredPanelParams {
    pub width_mm: Real,
    pub height_mm: Real,
    pub thickness: Real,
    pub lettered_slots_per_row: u32,
    pub side_column_rows: u32,
    pub side_column_split_rows: u32,
}

impl LetteredPanelParams {
    pub const fn definitions() -> &'static [ParamDef] {
        LETTERED_PANEL_PARAMS
    }

    pub fn from_values(values: &ParamValues) -> Result<Self, ParamError> {
        let resolved = resolve(LETTERED_PANEL_PARAMS, values)?;
        Ok(Self {
            width_mm: inches_to_mm(resolved["width"]),
            height_mm: inches_to_mm(resolved["height"]),
            thickness: resolved["thickness"],
            lettered_slots_per_row: count(&resolved, "letteredSlotsPerRow")?,
            side_column_rows: count(&resolved, "sideColumnRows")?,
            side_column_split_rows: count(&resolved, "sideColumnSplitRows")?,
        })
    }
}

/// Resolved input for the bead panel, in internal units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeadPanelParams {
    pub width_mm: Real,
    pub height_mm: Real,
    pub thickness: Real,
    pub slots_per_row: u32,
}

impl BeadPanelParams {
    pub const fn definitions() -> &'static [ParamDef] {
        BEAD_PANEL_PARAMS
    }

    pub fn from_values(values: &ParamValues) -> Result<Self, ParamError> {
        let resolved = resolve(BEAD_PANEL_PARAMS, values)?;
        Ok(Self {
            width_mm: inches_to_mm(resolved["width"]),
            height_mm: inches_to_mm(resolved["height"]),
            thickness: resolved["thickness"],
            slots_per_row: count(&resolved, "slotsPerRow")?,
        })
    }
}
