use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::vector::Vector3;

/// Unique identifier for every entity placed on a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Generate a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Discriminator naming an entity's kind in the game's template vocabulary.
///
/// Only `StartingLocation` and `WaterSource` are generated today; the other
/// names are reserved so the vocabulary matches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Template {
    /// Where the colony begins.
    StartingLocation,
    /// A ramp between two layers.
    Slope,
    /// A spring that emits water every tick.
    WaterSource,
    /// Impassable terrain block.
    Barrier,
    /// Buried ruins.
    UndergroundRuins,
    /// An eight-block ruin column.
    RuinColumnH8,
    /// A birch tree.
    Birch,
    /// A blueberry bush.
    BlueberryBush,
}

impl Template {
    /// Every template, in declaration order.
    pub const ALL: [Template; 8] = [
        Self::StartingLocation,
        Self::Slope,
        Self::WaterSource,
        Self::Barrier,
        Self::UndergroundRuins,
        Self::RuinColumnH8,
        Self::Birch,
        Self::BlueberryBush,
    ];

    /// The exact string the game uses for this template.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartingLocation => "StartingLocation",
            Self::Slope => "Slope",
            Self::WaterSource => "WaterSource",
            Self::Barrier => "Barrier",
            Self::UndergroundRuins => "UndergroundRuins",
            Self::RuinColumnH8 => "RuinColumnH8",
            Self::Birch => "Birch",
            Self::BlueberryBush => "BlueberryBush",
        }
    }

    /// Look a template up by its game name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Component blocks
// ---------------------------------------------------------------------------

/// Placement of an entity in the block grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockObject {
    /// Block the entity occupies.
    pub coordinates: Vector3,
}

/// Output strength of a water source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WaterSourceStrength {
    /// Strength the source was configured with.
    pub specified_strength: i64,
    /// Strength the source currently emits.
    pub current_strength: i64,
}

/// Whether an object has dried out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DryObject {
    /// True once the object lacks water.
    pub is_dry: bool,
}

/// Components of an entity that only occupies a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlacedComponents {
    /// Where the entity sits.
    pub block_object: BlockObject,
}

/// Components of a water source entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WaterSourceComponents {
    /// Where the source sits.
    pub block_object: BlockObject,
    /// How much water it emits.
    pub water_source: WaterSourceStrength,
}

/// Components of an entity that can dry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DryingComponents {
    /// Where the entity sits.
    pub block_object: BlockObject,
    /// Its dryness.
    pub dry_object: DryObject,
}

/// Kind-specific payload of an entity, tagged by its [`Template`].
///
/// Encodes as the two sibling keys `"Template"` and `"Components"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Template", content = "Components")]
pub enum Components {
    /// See [`Template::StartingLocation`].
    StartingLocation(PlacedComponents),
    /// See [`Template::Slope`].
    Slope(PlacedComponents),
    /// See [`Template::WaterSource`].
    WaterSource(WaterSourceComponents),
    /// See [`Template::Barrier`].
    Barrier(PlacedComponents),
    /// See [`Template::UndergroundRuins`].
    UndergroundRuins(DryingComponents),
    /// See [`Template::RuinColumnH8`].
    RuinColumnH8(DryingComponents),
    /// See [`Template::Birch`].
    Birch(DryingComponents),
    /// See [`Template::BlueberryBush`].
    BlueberryBush(DryingComponents),
}

impl Components {
    /// A starting location at `at`.
    pub fn starting_location(at: Vector3) -> Self {
        Self::StartingLocation(PlacedComponents {
            block_object: BlockObject { coordinates: at },
        })
    }

    /// A water source at `at` emitting `strength`.
    pub fn water_source(at: Vector3, strength: i64) -> Self {
        Self::WaterSource(WaterSourceComponents {
            block_object: BlockObject { coordinates: at },
            water_source: WaterSourceStrength {
                specified_strength: strength,
                current_strength: strength,
            },
        })
    }

    /// The template this payload belongs to.
    pub const fn template(&self) -> Template {
        match self {
            Self::StartingLocation(_) => Template::StartingLocation,
            Self::Slope(_) => Template::Slope,
            Self::WaterSource(_) => Template::WaterSource,
            Self::Barrier(_) => Template::Barrier,
            Self::UndergroundRuins(_) => Template::UndergroundRuins,
            Self::RuinColumnH8(_) => Template::RuinColumnH8,
            Self::Birch(_) => Template::Birch,
            Self::BlueberryBush(_) => Template::BlueberryBush,
        }
    }

    /// Block every kind of entity occupies.
    pub const fn block_object(&self) -> &BlockObject {
        match self {
            Self::StartingLocation(c) | Self::Slope(c) | Self::Barrier(c) => &c.block_object,
            Self::WaterSource(c) => &c.block_object,
            Self::UndergroundRuins(c)
            | Self::RuinColumnH8(c)
            | Self::Birch(c)
            | Self::BlueberryBush(c) => &c.block_object,
        }
    }
}

/// A placeable game object: identifier plus kind-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier for this entity.
    #[serde(rename = "Id")]
    pub id: EntityId,
    /// Template tag and payload.
    #[serde(flatten)]
    pub components: Components,
}

impl Entity {
    /// Create an entity with a pre-assigned ID.
    pub fn new(id: EntityId, components: Components) -> Self {
        Self { id, components }
    }

    /// The entity's template.
    pub const fn template(&self) -> Template {
        self.components.template()
    }

    /// The block the entity occupies.
    pub const fn coordinates(&self) -> Vector3 {
        self.components.block_object().coordinates
    }
}
