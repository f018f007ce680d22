use crate::error::ConfigurationError;
use crate::model::Point;
use crate::orientation::Orientation;
use serde::{Deserialize, Serialize};

/// How depth coordinates are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowMode {
    /// A child starts right after its parent's far edge plus the row spacing, so rows are as
    /// deep as the nodes on them.
    #[default]
    NonLayered,
    /// Every node at the same depth shares one row, as deep as the deepest node on it.
    Layered,
}

/// Where a parent sits relative to its children along the sibling axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParentAlignment {
    /// Centre on the midpoint between the first and the last child's centres.
    #[default]
    ChildCenters,
    /// Centre on the midpoint between the first child's near edge and the last child's far
    /// edge. Differs from `ChildCenters` only when those two children have unequal sizes.
    ChildExtents,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    /// Minimum gap between two nodes that share part of the growth axis.
    pub minimum_sibling_spacing: f64,
    /// Gap between a parent's far edge and its children.
    pub row_spacing: f64,
    /// Gap between the root and its children. Falls back to `row_spacing`.
    pub root_row_spacing: Option<f64>,
    pub orientation: Orientation,
    /// Number of root children placed in the first group of a standard orientation (right, or
    /// downward). `None` puts the larger half first.
    pub root_split_index: Option<usize>,
    pub row_mode: RowMode,
    pub parent_alignment: ParentAlignment,
    /// Space reserved after every abstract range.
    pub abstract_bracket_thickness: f64,
    /// Deepest tree accepted (the root is at depth 0).
    pub max_depth: usize,
    /// Top-left corner of the root node.
    pub origin: Point,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            minimum_sibling_spacing: 10.0,
            row_spacing: 40.0,
            root_row_spacing: None,
            orientation: Orientation::Right,
            root_split_index: None,
            row_mode: RowMode::NonLayered,
            parent_alignment: ParentAlignment::ChildCenters,
            abstract_bracket_thickness: 24.0,
            max_depth: 1024,
            origin: Point::default(),
        }
    }
}

impl LayoutOptions {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        non_negative("minimumSiblingSpacing", self.minimum_sibling_spacing)?;
        non_negative("rowSpacing", self.row_spacing)?;
        if let Some(v) = self.root_row_spacing {
            non_negative("rootRowSpacing", v)?;
        }
        non_negative("abstractBracketThickness", self.abstract_bracket_thickness)?;
        if self.max_depth == 0 {
            return Err(ConfigurationError::InvalidOption {
                name: "maxDepth",
                value: "0".to_string(),
            });
        }
        if !self.origin.x.is_finite() || !self.origin.y.is_finite() {
            return Err(ConfigurationError::InvalidOption {
                name: "origin",
                value: format!("({}, {})", self.origin.x, self.origin.y),
            });
        }
        Ok(())
    }

    /// Row gap below a node at `depth`.
    pub(crate) fn row_gap(&self, depth: usize) -> f64 {
        match (depth, self.root_row_spacing) {
            (0, Some(v)) => v,
            _ => self.row_spacing,
        }
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidOption {
            name,
            value: value.to_string(),
        })
    }
}
