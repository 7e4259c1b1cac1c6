//! The closed set of block variants and the metadata derived from them.
//!
//! A [`Block`] carries no per-instance state. Solidity, transparency,
//! alpha-blend routing and display colour all follow from its
//! [`MaterialClass`], so adding a variant means adding one line per table.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One cell of the world grid.
///
/// `Air` is discriminant 0 so that a zeroed grid is empty space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Block {
    #[default]
    Air = 0,
    Grass,
    Dirt,
    Stone,
    Cobblestone,
    Bedrock,
    Sand,
    Gravel,
    Water,

    OakLog,
    OakPlanks,
    OakLeaves,
    BirchLog,
    BirchPlanks,
    BirchLeaves,
    AcaciaLog,
    AcaciaPlanks,
    AcaciaLeaves,
    DarkOakLog,
    DarkOakPlanks,
    DarkOakLeaves,

    StoneBricks,
    MossyStoneBricks,
    Andesite,
    Granite,
    Diorite,
    MossyCobblestone,
    SmoothStone,

    Sandstone,
    ChiseledSandstone,
    CutSandstone,
    RedSand,
    RedSandstone,

    CoalOre,
    IronOre,
    GoldOre,
    DiamondOre,
    RedstoneOre,
    EmeraldOre,
    LapisOre,

    IronBlock,
    GoldBlock,
    DiamondBlock,
    EmeraldBlock,
    RedstoneBlock,
    LapisBlock,
    CoalBlock,

    WhiteWool,
    OrangeWool,
    MagentaWool,
    LightBlueWool,
    YellowWool,
    LimeWool,
    PinkWool,
    GrayWool,
    LightGrayWool,
    CyanWool,
    PurpleWool,
    BlueWool,
    BrownWool,
    GreenWool,
    RedWool,
    BlackWool,

    Glass,
    WhiteStainedGlass,
    OrangeStainedGlass,
    MagentaStainedGlass,
    LightBlueStainedGlass,
    YellowStainedGlass,
    LimeStainedGlass,
    PinkStainedGlass,
    GrayStainedGlass,
    LightGrayStainedGlass,
    CyanStainedGlass,
    PurpleStainedGlass,
    BlueStainedGlass,
    BrownStainedGlass,
    GreenStainedGlass,
    RedStainedGlass,
    BlackStainedGlass,

    Bricks,
    Bookshelf,
    CraftingTable,
    Furnace,
    Chest,
    Glowstone,
    Obsidian,
    Netherrack,
    SoulSand,
    EndStone,
    PurpurBlock,
    QuartzBlock,
    PackedIce,
    BlueIce,
    Ice,
    SnowBlock,
    Cactus,
    Pumpkin,
    JackOLantern,
    Melon,
    HayBlock,
}

static_assertions::assert_eq_size!(Block, u8);

/// Rendering/physics category of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialClass {
    /// Empty space.
    Empty,
    /// Fluid: see-through, walk-through, alpha blended.
    Liquid,
    /// Glass-like: see-through, solid, alpha blended.
    Glass,
    /// Leaf-like: see-through, solid, alpha blended.
    Foliage,
    /// Clear ice: see-through, solid, alpha blended.
    Ice,
    /// Everything else.
    Opaque,
}

/// An 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);

    /// Opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Colour with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

impl Block {
    /// Number of variants.
    pub const COUNT: usize = Block::HayBlock as usize + 1;

    /// Every variant in discriminant order.
    pub const ALL: [Block; Block::COUNT] = {
        use Block::*;
        [
            Air, Grass, Dirt, Stone, Cobblestone, Bedrock, Sand, Gravel, Water,
            OakLog, OakPlanks, OakLeaves, BirchLog, BirchPlanks, BirchLeaves,
            AcaciaLog, AcaciaPlanks, AcaciaLeaves, DarkOakLog, DarkOakPlanks, DarkOakLeaves,
            StoneBricks, MossyStoneBricks, Andesite, Granite, Diorite, MossyCobblestone,
            SmoothStone, Sandstone, ChiseledSandstone, CutSandstone, RedSand, RedSandstone,
            CoalOre, IronOre, GoldOre, DiamondOre, RedstoneOre, EmeraldOre, LapisOre,
            IronBlock, GoldBlock, DiamondBlock, EmeraldBlock, RedstoneBlock, LapisBlock,
            CoalBlock, WhiteWool, OrangeWool, MagentaWool, LightBlueWool, YellowWool,
            LimeWool, PinkWool, GrayWool, LightGrayWool, CyanWool, PurpleWool, BlueWool,
            BrownWool, GreenWool, RedWool, BlackWool, Glass, WhiteStainedGlass,
            OrangeStainedGlass, MagentaStainedGlass, LightBlueStainedGlass,
            YellowStainedGlass, LimeStainedGlass, PinkStainedGlass, GrayStainedGlass,
            LightGrayStainedGlass, CyanStainedGlass, PurpleStainedGlass, BlueStainedGlass,
            BrownStainedGlass, GreenStainedGlass, RedStainedGlass, BlackStainedGlass, Bricks,
            Bookshelf, CraftingTable, Furnace, Chest, Glowstone, Obsidian, Netherrack,
            SoulSand, EndStone, PurpurBlock, QuartzBlock, PackedIce, BlueIce, Ice, SnowBlock,
            Cactus, Pumpkin, JackOLantern, Melon, HayBlock,
        ]
    };

    /// Discriminant as a table index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Block::index`].
    pub const fn from_index(index: usize) -> Option<Block> {
        if index < Block::COUNT {
            Some(Block::ALL[index])
        } else {
            None
        }
    }

    /// The material class every other property derives from.
    pub const fn class(self) -> MaterialClass {
        use Block::*;
        match self {
            Air => MaterialClass::Empty,
            Water => MaterialClass::Liquid,
            OakLeaves | BirchLeaves | AcaciaLeaves | DarkOakLeaves => MaterialClass::Foliage,
            Ice => MaterialClass::Ice,
            Glass | WhiteStainedGlass | OrangeStainedGlass | MagentaStainedGlass
            | LightBlueStainedGlass | YellowStainedGlass | LimeStainedGlass
            | PinkStainedGlass | GrayStainedGlass | LightGrayStainedGlass
            | CyanStainedGlass | PurpleStainedGlass | BlueStainedGlass
            | BrownStainedGlass | GreenStainedGlass | RedStainedGlass
            | BlackStainedGlass => MaterialClass::Glass,
            _ => MaterialClass::Opaque,
        }
    }

    /// Whether the block is empty space.
    #[inline]
    pub const fn is_air(self) -> bool {
        matches!(self, Block::Air)
    }

    /// Blocks movement. Everything except air and liquid.
    #[inline]
    pub const fn is_solid(self) -> bool {
        !matches!(self.class(), MaterialClass::Empty | MaterialClass::Liquid)
    }

    /// Lets a neighbour's face show through. Drives face culling.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        !matches!(self.class(), MaterialClass::Opaque)
    }

    /// Must be drawn in the back-to-front alpha-blended pass.
    #[inline]
    pub const fn needs_alpha_blend(self) -> bool {
        matches!(
            self.class(),
            MaterialClass::Liquid
                | MaterialClass::Glass
                | MaterialClass::Foliage
                | MaterialClass::Ice
        )
    }

    /// Stable snake_case identifier, identical to the serde name.
    pub const fn name(self) -> &'static str {
        use Block::*;
        match self {
            Air => "air",
            Grass => "grass",
            Dirt => "dirt",
            Stone => "stone",
            Cobblestone => "cobblestone",
            Bedrock => "bedrock",
            Sand => "sand",
            Gravel => "gravel",
            Water => "water",
            OakLog => "oak_log",
            OakPlanks => "oak_planks",
            OakLeaves => "oak_leaves",
            BirchLog => "birch_log",
            BirchPlanks => "birch_planks",
            BirchLeaves => "birch_leaves",
            AcaciaLog => "acacia_log",
            AcaciaPlanks => "acacia_planks",
            AcaciaLeaves => "acacia_leaves",
            DarkOakLog => "dark_oak_log",
            DarkOakPlanks => "dark_oak_planks",
            DarkOakLeaves => "dark_oak_leaves",
            StoneBricks => "stone_bricks",
            MossyStoneBricks => "mossy_stone_bricks",
            Andesite => "andesite",
            Granite => "granite",
            Diorite => "diorite",
            MossyCobblestone => "mossy_cobblestone",
            SmoothStone => "smooth_stone",
            Sandstone => "sandstone",
            ChiseledSandstone => "chiseled_sandstone",
            CutSandstone => "cut_sandstone",
            RedSand => "red_sand",
            RedSandstone => "red_sandstone",
            CoalOre => "coal_ore",
            IronOre => "iron_ore",
            GoldOre => "gold_ore",
            DiamondOre => "diamond_ore",
            RedstoneOre => "redstone_ore",
            EmeraldOre => "emerald_ore",
            LapisOre => "lapis_ore",
            IronBlock => "iron_block",
            GoldBlock => "gold_block",
            DiamondBlock => "diamond_block",
            EmeraldBlock => "emerald_block",
            RedstoneBlock => "redstone_block",
            LapisBlock => "lapis_block",
            CoalBlock => "coal_block",
            WhiteWool => "white_wool",
            OrangeWool => "orange_wool",
            MagentaWool => "magenta_wool",
            LightBlueWool => "light_blue_wool",
            YellowWool => "yellow_wool",
            LimeWool => "lime_wool",
            PinkWool => "pink_wool",
            GrayWool => "gray_wool",
            LightGrayWool => "light_gray_wool",
            CyanWool => "cyan_wool",
            PurpleWool => "purple_wool",
            BlueWool => "blue_wool",
            BrownWool => "brown_wool",
            GreenWool => "green_wool",
            RedWool => "red_wool",
            BlackWool => "black_wool",
            Glass => "glass",
            WhiteStainedGlass => "white_stained_glass",
            OrangeStainedGlass => "orange_stained_glass",
            MagentaStainedGlass => "magenta_stained_glass",
            LightBlueStainedGlass => "light_blue_stained_glass",
            YellowStainedGlass => "yellow_stained_glass",
            LimeStainedGlass => "lime_stained_glass",
            PinkStainedGlass => "pink_stained_glass",
            GrayStainedGlass => "gray_stained_glass",
            LightGrayStainedGlass => "light_gray_stained_glass",
            CyanStainedGlass => "cyan_stained_glass",
            PurpleStainedGlass => "purple_stained_glass",
            BlueStainedGlass => "blue_stained_glass",
            BrownStainedGlass => "brown_stained_glass",
            GreenStainedGlass => "green_stained_glass",
            RedStainedGlass => "red_stained_glass",
            BlackStainedGlass => "black_stained_glass",
            Bricks => "bricks",
            Bookshelf => "bookshelf",
            CraftingTable => "crafting_table",
            Furnace => "furnace",
            Chest => "chest",
            Glowstone => "glowstone",
            Obsidian => "obsidian",
            Netherrack => "netherrack",
            SoulSand => "soul_sand",
            EndStone => "end_stone",
            PurpurBlock => "purpur_block",
            QuartzBlock => "quartz_block",
            PackedIce => "packed_ice",
            BlueIce => "blue_ice",
            Ice => "ice",
            SnowBlock => "snow_block",
            Cactus => "cactus",
            Pumpkin => "pumpkin",
            JackOLantern => "jack_o_lantern",
            Melon => "melon",
            HayBlock => "hay_block",
        }
    }

    /// Looks a block up by its [`Block::name`].
    pub fn from_name(name: &str) -> Option<Block> {
        Block::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Flat display colour, used for icons and untextured rendering.
    pub const fn display_color(self) -> Rgba {
        use Block::*;
        match self {
            Air => Rgba::rgba(0, 0, 0, 0),
            Grass => Rgba::rgb(0, 228, 48),
            Dirt => Rgba::rgb(127, 106, 79),
            Stone => Rgba::rgb(130, 130, 130),
            Cobblestone => Rgba::rgb(122, 122, 122),
            Bedrock => Rgba::rgb(64, 64, 64),
            Sand => Rgba::rgb(211, 176, 131),
            Gravel => Rgba::rgb(136, 136, 136),
            Water => Rgba::rgb(0, 121, 241),
            OakLog => Rgba::rgb(139, 69, 19),
            OakPlanks => Rgba::rgb(162, 130, 78),
            OakLeaves => Rgba::rgb(0, 117, 44),
            BirchLog => Rgba::rgb(220, 220, 220),
            BirchPlanks => Rgba::rgb(192, 175, 121),
            BirchLeaves => Rgba::rgb(128, 167, 85),
            AcaciaLog => Rgba::rgb(103, 96, 86),
            AcaciaPlanks => Rgba::rgb(168, 90, 50),
            AcaciaLeaves => Rgba::rgb(99, 128, 15),
            DarkOakLog => Rgba::rgb(60, 46, 26),
            DarkOakPlanks => Rgba::rgb(66, 43, 20),
            DarkOakLeaves => Rgba::rgb(48, 80, 20),
            StoneBricks => Rgba::rgb(123, 123, 123),
            MossyStoneBricks => Rgba::rgb(115, 121, 105),
            Andesite => Rgba::rgb(132, 134, 132),
            Granite => Rgba::rgb(149, 103, 85),
            Diorite => Rgba::rgb(188, 188, 188),
            MossyCobblestone => Rgba::rgb(110, 118, 94),
            SmoothStone => Rgba::rgb(158, 158, 158),
            Sandstone => Rgba::rgb(216, 203, 155),
            ChiseledSandstone => Rgba::rgb(216, 202, 155),
            CutSandstone => Rgba::rgb(217, 206, 159),
            RedSand => Rgba::rgb(190, 102, 33),
            RedSandstone => Rgba::rgb(186, 99, 29),
            CoalOre => Rgba::rgb(84, 84, 84),
            IronOre => Rgba::rgb(135, 106, 97),
            GoldOre => Rgba::rgb(143, 140, 125),
            DiamondOre => Rgba::rgb(92, 219, 213),
            RedstoneOre => Rgba::rgb(133, 107, 107),
            EmeraldOre => Rgba::rgb(108, 136, 115),
            LapisOre => Rgba::rgb(99, 110, 132),
            IronBlock => Rgba::rgb(220, 220, 220),
            GoldBlock => Rgba::rgb(255, 203, 0),
            DiamondBlock => Rgba::rgb(93, 219, 213),
            EmeraldBlock => Rgba::rgb(42, 203, 87),
            RedstoneBlock => Rgba::rgb(175, 24, 5),
            LapisBlock => Rgba::rgb(30, 67, 140),
            CoalBlock => Rgba::rgb(16, 15, 15),
            WhiteWool => Rgba::WHITE,
            OrangeWool => Rgba::rgb(255, 161, 0),
            MagentaWool => Rgba::rgb(189, 68, 179),
            LightBlueWool => Rgba::rgb(58, 175, 217),
            YellowWool => Rgba::rgb(248, 197, 39),
            LimeWool => Rgba::rgb(112, 185, 25),
            PinkWool => Rgba::rgb(237, 141, 172),
            GrayWool => Rgba::rgb(62, 68, 71),
            LightGrayWool => Rgba::rgb(142, 142, 134),
            CyanWool => Rgba::rgb(21, 137, 145),
            PurpleWool => Rgba::rgb(121, 42, 172),
            BlueWool => Rgba::rgb(0, 121, 241),
            BrownWool => Rgba::rgb(114, 71, 40),
            GreenWool => Rgba::rgb(84, 109, 27),
            RedWool => Rgba::rgb(230, 41, 55),
            BlackWool => Rgba::rgb(20, 21, 25),
            Glass => Rgba::rgba(255, 255, 255, 128),
            WhiteStainedGlass => Rgba::rgba(255, 255, 255, 160),
            OrangeStainedGlass => Rgba::rgba(216, 127, 51, 160),
            MagentaStainedGlass => Rgba::rgba(178, 76, 216, 160),
            LightBlueStainedGlass => Rgba::rgba(102, 153, 216, 160),
            YellowStainedGlass => Rgba::rgba(229, 229, 51, 160),
            LimeStainedGlass => Rgba::rgba(127, 204, 25, 160),
            PinkStainedGlass => Rgba::rgba(242, 127, 165, 160),
            GrayStainedGlass => Rgba::rgba(76, 76, 76, 160),
            LightGrayStainedGlass => Rgba::rgba(153, 153, 153, 160),
            CyanStainedGlass => Rgba::rgba(76, 127, 153, 160),
            PurpleStainedGlass => Rgba::rgba(127, 63, 178, 160),
            BlueStainedGlass => Rgba::rgba(51, 76, 178, 160),
            BrownStainedGlass => Rgba::rgba(102, 76, 51, 160),
            GreenStainedGlass => Rgba::rgba(102, 127, 51, 160),
            RedStainedGlass => Rgba::rgba(153, 51, 51, 160),
            BlackStainedGlass => Rgba::rgba(25, 25, 25, 160),
            Bricks => Rgba::rgb(150, 97, 83),
            Bookshelf => Rgba::rgb(139, 69, 19),
            CraftingTable => Rgba::rgb(255, 207, 139),
            Furnace => Rgba::rgb(110, 110, 110),
            Chest => Rgba::rgb(164, 116, 46),
            Glowstone => Rgba::rgb(255, 203, 0),
            Obsidian => Rgba::rgb(20, 18, 30),
            Netherrack => Rgba::rgb(97, 38, 38),
            SoulSand => Rgba::rgb(81, 62, 50),
            EndStone => Rgba::rgb(221, 223, 165),
            PurpurBlock => Rgba::rgb(169, 125, 169),
            QuartzBlock => Rgba::rgb(235, 229, 222),
            PackedIce => Rgba::rgb(160, 160, 255),
            BlueIce => Rgba::rgb(116, 167, 253),
            Ice => Rgba::rgba(145, 183, 253, 180),
            SnowBlock => Rgba::rgb(249, 254, 254),
            Cactus => Rgba::rgb(88, 130, 43),
            Pumpkin => Rgba::rgb(255, 161, 0),
            JackOLantern => Rgba::rgb(230, 140, 30),
            Melon => Rgba::rgb(111, 145, 31),
            HayBlock => Rgba::rgb(166, 136, 38),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
