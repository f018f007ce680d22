use crate::model::AbstractRange;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// The input tree cannot be mirrored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StructuralError {
    /// The tree is deeper than `LayoutOptions::max_depth`. Cyclic sources end up here too.
    #[error("tree exceeds the maximum layout depth of {limit}")]
    MaxDepthExceeded { limit: usize },

    #[error("duplicate node id: {id}")]
    DuplicateNodeId { id: String },
}

/// The layout options or the abstract ranges attached to the tree are inconsistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("abstract ranges {first} and {second} overlap")]
    OverlappingAbstractRanges {
        first: AbstractRange,
        second: AbstractRange,
    },

    #[error("abstract range {range} is out of bounds for {child_count} children")]
    AbstractRangeOutOfBounds {
        range: AbstractRange,
        child_count: usize,
    },

    #[error("abstract range {range} straddles the root split at {split}")]
    AbstractRangeStraddlesSplit { range: AbstractRange, split: usize },

    #[error("invalid layout option `{name}`: {value}")]
    InvalidOption { name: &'static str, value: String },
}
