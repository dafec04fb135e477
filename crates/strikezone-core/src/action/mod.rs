//! Action definitions as the resolver sees them.
//!
//! Game data describes an action's area with a numeric cast type, an effect
//! range, and a width modifier. [`ActionDefinition`] holds those three values
//! after validation, and [`ActionDefinition::shape`] turns them into an
//! [`AreaShape`] that carries only the parameters its shape needs.
//!
//! | Cast type | Shape | Parameters |
//! |---|---|---|
//! | `None`, `SingleTarget` | [`AreaShape::Splash`] | radius = effect range |
//! | `Circle` | [`AreaShape::Circle`] | radius = effect range |
//! | `Box` | [`AreaShape::Box`] | width = width modifier, length = effect range |
//! | anything else | [`AreaShape::Unsupported`] | none |
//!
//! Single-target actions keep their effect range as a splash radius. Some
//! of them really do splash, so the radius is never forced to zero here.

pub mod table;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ActionDataError, Result};

pub use table::{ActionEntry, ActionTable};

/// Identifier of an action in game data.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActionId(u32);

impl ActionId {
    /// Creates a new `ActionId` from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw value of this identifier.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActionId({})", self.0)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cast type column from game data.
///
/// Values the game data uses but this crate has no geometry for decode to a
/// named variant (`Cone`, `PersistentArea`) or to `Unknown`, and resolve to
/// [`AreaShape::Unsupported`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastType {
    /// No area data (0)
    None,
    /// Single target with optional splash (1)
    SingleTarget,
    /// Circle around the origin (2)
    Circle,
    /// Cone in front of the caster (3)
    Cone,
    /// Rectangle anchored at the origin (4)
    Box,
    /// Ground-placed lingering area (7)
    PersistentArea,
    /// Any other raw value
    Unknown(u8),
}

impl From<u8> for CastType {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::SingleTarget,
            2 => Self::Circle,
            3 => Self::Cone,
            4 => Self::Box,
            7 => Self::PersistentArea,
            other => Self::Unknown(other),
        }
    }
}

impl From<CastType> for u8 {
    fn from(cast_type: CastType) -> Self {
        match cast_type {
            CastType::None => 0,
            CastType::SingleTarget => 1,
            CastType::Circle => 2,
            CastType::Cone => 3,
            CastType::Box => 4,
            CastType::PersistentArea => 7,
            CastType::Unknown(raw) => raw,
        }
    }
}

/// Geometry of a cast's affected area.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum AreaShape {
    /// Splash around the target of a `None` or `SingleTarget` cast
    Splash {
        /// Splash radius
        radius: f32,
    },
    /// Circle around the origin
    Circle {
        /// Circle radius
        radius: f32,
    },
    /// Rectangle spanning `width` along +x and `length` along +y
    Box {
        /// Extent along x
        width: f32,
        /// Extent along y
        length: f32,
    },
    /// Cast type with no geometry; strikes nothing
    Unsupported(CastType),
}

/// Area-of-effect parameters of one action.
///
/// # Example
///
/// ```
/// use strikezone_core::action::{ActionDefinition, AreaShape, CastType};
///
/// let line = ActionDefinition::new(CastType::Box, 10.0, 4.0).unwrap();
/// assert_eq!(line.shape(), AreaShape::Box { width: 4.0, length: 10.0 });
///
/// assert!(ActionDefinition::new(CastType::Circle, -1.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawActionDefinition", into = "RawActionDefinition")]
pub struct ActionDefinition {
    cast_type: CastType,
    effect_range: f32,
    width_modifier: f32,
}

impl ActionDefinition {
    /// Creates a definition, rejecting negative or non-finite dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ActionDataError::InvalidDimension`] if `effect_range` or
    /// `width_modifier` is negative, NaN, or infinite.
    pub fn new(cast_type: CastType, effect_range: f32, width_modifier: f32) -> Result<Self> {
        check_dimension("effect_range", effect_range)?;
        check_dimension("width_modifier", width_modifier)?;
        Ok(Self {
            cast_type,
            effect_range,
            width_modifier,
        })
    }

    /// Creates a definition from the raw game data columns.
    ///
    /// # Errors
    ///
    /// Same as [`ActionDefinition::new`].
    pub fn from_raw(cast_type: u8, effect_range: f32, width_modifier: f32) -> Result<Self> {
        Self::new(CastType::from(cast_type), effect_range, width_modifier)
    }

    /// Creates a circle of the given radius.
    ///
    /// # Errors
    ///
    /// Same as [`ActionDefinition::new`].
    pub fn circle(radius: f32) -> Result<Self> {
        Self::new(CastType::Circle, radius, 0.0)
    }

    /// Creates a single-target action with the given splash radius.
    ///
    /// # Errors
    ///
    /// Same as [`ActionDefinition::new`].
    pub fn single_target(splash_radius: f32) -> Result<Self> {
        Self::new(CastType::SingleTarget, splash_radius, 0.0)
    }

    /// Creates a box of the given width (x) and length (y).
    ///
    /// # Errors
    ///
    /// Same as [`ActionDefinition::new`].
    pub fn rectangle(width: f32, length: f32) -> Result<Self> {
        Self::new(CastType::Box, length, width)
    }

    /// Returns the cast type.
    #[must_use]
    pub const fn cast_type(&self) -> CastType {
        self.cast_type
    }

    /// Returns the effect range (radius, or box length).
    #[must_use]
    pub const fn effect_range(&self) -> f32 {
        self.effect_range
    }

    /// Returns the width modifier (box width).
    #[must_use]
    pub const fn width_modifier(&self) -> f32 {
        self.width_modifier
    }

    /// Returns the area this action strikes.
    #[must_use]
    pub const fn shape(&self) -> AreaShape {
        match self.cast_type {
            CastType::None | CastType::SingleTarget => AreaShape::Splash {
                radius: self.effect_range,
            },
            CastType::Circle => AreaShape::Circle {
                radius: self.effect_range,
            },
            CastType::Box => AreaShape::Box {
                width: self.width_modifier,
                length: self.effect_range,
            },
            other => AreaShape::Unsupported(other),
        }
    }
}

fn check_dimension(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ActionDataError::InvalidDimension { field, value })
    }
}

/// Serialized form of [`ActionDefinition`], matching the game data columns.
#[derive(Serialize, Deserialize)]
struct RawActionDefinition {
    cast_type: u8,
    effect_range: f32,
    #[serde(default)]
    width_modifier: f32,
}

impl TryFrom<RawActionDefinition> for ActionDefinition {
    type Error = ActionDataError;

    fn try_from(raw: RawActionDefinition) -> Result<Self> {
        Self::from_raw(raw.cast_type, raw.effect_range, raw.width_modifier)
    }
}

impl From<ActionDefinition> for RawActionDefinition {
    fn from(def: ActionDefinition) -> Self {
        Self {
            cast_type: def.cast_type.into(),
            effect_range: def.effect_range,
            width_modifier: def.width_modifier,
        }
    }
}
