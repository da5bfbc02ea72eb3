//! Edge and corner orientations for masks, tile placement and edge extension

use crate::io::error::{AssetError, Result};
use std::fmt;
use std::str::FromStr;

/// Side or corner of a base tile
///
/// A direction names where a faded tile sits relative to the base tile, so
/// its mask reaches zero on that side (the tileset boundary) and full
/// opacity on the opposite side (the base tile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// West edge
    Left,
    /// East edge
    Right,
    /// North edge
    Top,
    /// South edge
    Bottom,
    /// North-west corner
    TopLeft,
    /// North-east corner
    TopRight,
    /// South-west corner
    BottomLeft,
    /// South-east corner
    BottomRight,
}

impl Direction {
    /// The four edge directions in placement order
    pub const EDGES: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// The four corner directions in placement order
    pub const CORNERS: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// True for left, right, top and bottom
    pub const fn is_edge(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Top | Self::Bottom)
    }

    /// True for the four diagonal directions
    pub const fn is_corner(self) -> bool {
        !self.is_edge()
    }

    /// Vertical and horizontal edges meeting at a corner
    ///
    /// Returns `None` for edge directions.
    pub const fn corner_edges(self) -> Option<(Self, Self)> {
        match self {
            Self::TopLeft => Some((Self::Top, Self::Left)),
            Self::TopRight => Some((Self::Top, Self::Right)),
            Self::BottomLeft => Some((Self::Bottom, Self::Left)),
            Self::BottomRight => Some((Self::Bottom, Self::Right)),
            Self::Left | Self::Right | Self::Top | Self::Bottom => None,
        }
    }

    /// True if the direction runs across the image width
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Reject corner directions where only edges make sense
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirection` for corner directions
    pub fn require_edge(self) -> Result<Self> {
        if self.is_edge() {
            Ok(self)
        } else {
            Err(AssetError::InvalidDirection {
                direction: self.name().to_string(),
                reason: "only left, right, top and bottom are allowed here",
            })
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "top-left" => Ok(Self::TopLeft),
            "top-right" => Ok(Self::TopRight),
            "bottom-left" => Ok(Self::BottomLeft),
            "bottom-right" => Ok(Self::BottomRight),
            _ => Err(AssetError::InvalidDirection {
                direction: s.to_string(),
                reason: "expected an edge or corner name such as 'left' or 'top-right'",
            }),
        }
    }
}
