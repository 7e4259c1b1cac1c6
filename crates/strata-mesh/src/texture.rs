//! Per-face texture naming and texture-atlas UV lookup.
//!
//! Every `(block, face)` pair maps to a texture name through a table built
//! once from a handful of per-block rules. A [`TextureAtlas`] assigns each
//! name a square tile and a [`BlockUvTable`] caches the resulting UV
//! rectangles so the mesher never touches strings.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use strata_voxel::Block;

use crate::face_direction::FaceDirection;

/// Default atlas edge length in pixels.
pub const DEFAULT_ATLAS_SIZE: u32 = 256;

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 16;

/// Texture used when a block has no naming rule.
pub const FALLBACK_TEXTURE: &str = "stone";

/// How a block's faces pick their textures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FaceRule {
    /// Same texture on every face.
    Uniform(&'static str),
    /// One texture on top and bottom, another on the four sides.
    Pillar {
        ends: &'static str,
        sides: &'static str,
    },
    /// Distinct top, bottom and side textures.
    Capped {
        top: &'static str,
        bottom: &'static str,
        sides: &'static str,
    },
    /// A distinct texture on the +Z face only.
    FrontFaced {
        front: &'static str,
        others: &'static str,
    },
}

impl FaceRule {
    fn name(self, face: FaceDirection) -> &'static str {
        match self {
            Self::Uniform(name) => name,
            Self::Pillar { ends, sides } => {
                if face.is_vertical() {
                    ends
                } else {
                    sides
                }
            }
            Self::Capped { top, bottom, sides } => match face {
                FaceDirection::PosY => top,
                FaceDirection::NegY => bottom,
                _ => sides,
            },
            Self::FrontFaced { front, others } => {
                if face == FaceDirection::PosZ {
                    front
                } else {
                    others
                }
            }
        }
    }
}

fn face_rule(block: Block) -> FaceRule {
    use FaceRule::*;
    match block {
        Block::Air => Uniform(FALLBACK_TEXTURE),
        Block::Grass => Capped {
            top: "grass_block_top",
            bottom: "dirt",
            sides: "grass_block_side",
        },
        Block::Water => Uniform("water_still"),
        Block::OakLog => Pillar {
            ends: "oak_log_top",
            sides: "oak_log",
        },
        Block::BirchLog => Pillar {
            ends: "birch_log_top",
            sides: "birch_log",
        },
        Block::AcaciaLog => Pillar {
            ends: "acacia_log_top",
            sides: "acacia_log",
        },
        Block::DarkOakLog => Pillar {
            ends: "dark_oak_log_top",
            sides: "dark_oak_log",
        },
        Block::Sandstone => Capped {
            top: "sandstone_top",
            bottom: "sandstone_bottom",
            sides: "sandstone",
        },
        Block::Bookshelf => Pillar {
            ends: "oak_planks",
            sides: "bookshelf",
        },
        Block::CraftingTable => Capped {
            top: "crafting_table_top",
            bottom: "oak_planks",
            sides: "crafting_table_side",
        },
        Block::Furnace => Uniform("furnace_side"),
        Block::QuartzBlock => Uniform("quartz_block_side"),
        Block::SnowBlock => Uniform("snow"),
        Block::Cactus => Capped {
            top: "cactus_top",
            bottom: "cactus_bottom",
            sides: "cactus_side",
        },
        Block::Pumpkin => Uniform("pumpkin_side"),
        Block::JackOLantern => FrontFaced {
            front: "jack_o_lantern",
            others: "pumpkin_side",
        },
        Block::Melon => Uniform("melon_side"),
        Block::HayBlock => Pillar {
            ends: "hay_block_top",
            sides: "hay_block_side",
        },
        other => Uniform(other.name()),
    }
}

/// `(block, face)` → texture name, resolved for every pair up front.
#[derive(Debug)]
pub struct FaceTextureTable {
    names: Vec<[&'static str; 6]>,
}

static FACE_TEXTURES: LazyLock<FaceTextureTable> = LazyLock::new(FaceTextureTable::build);

impl FaceTextureTable {
    fn build() -> Self {
        let names = Block::ALL
            .iter()
            .map(|&block| {
                let rule = face_rule(block);
                FaceDirection::ALL.map(|face| rule.name(face))
            })
            .collect();
        Self { names }
    }

    /// The process-wide table.
    pub fn get() -> &'static FaceTextureTable {
        &FACE_TEXTURES
    }

    pub fn name(&self, block: Block, face: FaceDirection) -> &'static str {
        self.names
            .get(block.index())
            .map_or(FALLBACK_TEXTURE, |faces| faces[face.index()])
    }

    /// Every distinct texture name, in first-use order over blocks then faces.
    pub fn unique_names(&self) -> Vec<&'static str> {
        let mut seen = rustc_hash::FxHashSet::default();
        let mut out = Vec::new();
        for (block, faces) in Block::ALL.iter().zip(&self.names) {
            if block.is_air() {
                continue;
            }
            for &name in faces {
                if seen.insert(name) {
                    out.push(name);
                }
            }
        }
        out
    }
}

/// Texture name drawn on `face` of `block`.
pub fn block_texture_name_for_face(block: Block, face: FaceDirection) -> &'static str {
    FaceTextureTable::get().name(block, face)
}

/// Normalised atlas rectangle: origin `(u, v)` and extent `(w, h)`, all in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UvRect {
    pub u: f32,
    pub v: f32,
    pub w: f32,
    pub h: f32,
}

impl UvRect {
    /// Maps a corner UV in `[0, 1]²` into this rectangle.
    pub fn map(&self, uv: [f32; 2]) -> [f32; 2] {
        [self.u + uv[0] * self.w, self.v + uv[1] * self.h]
    }
}

/// Square texture atlas of equally sized tiles, laid out row-major.
#[derive(Clone, Debug)]
pub struct TextureAtlas {
    atlas_size: u32,
    tile_size: u32,
    names: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl TextureAtlas {
    /// Creates an atlas and assigns tiles to `names` in order.
    ///
    /// Duplicate names keep their first tile. Names past the atlas capacity
    /// are dropped with a warning. A tile size of zero or larger than the
    /// atlas falls back to the defaults.
    pub fn new<'a>(
        atlas_size: u32,
        tile_size: u32,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let (atlas_size, tile_size) = if tile_size == 0 || tile_size > atlas_size {
            tracing::warn!(
                atlas_size,
                tile_size,
                "invalid atlas geometry, using {}px atlas with {}px tiles",
                DEFAULT_ATLAS_SIZE,
                DEFAULT_TILE_SIZE
            );
            (DEFAULT_ATLAS_SIZE, DEFAULT_TILE_SIZE)
        } else {
            (atlas_size, tile_size)
        };

        let mut atlas = Self {
            atlas_size,
            tile_size,
            names: Vec::new(),
            index: FxHashMap::default(),
        };
        let mut dropped = 0usize;
        for name in names {
            if atlas.index.contains_key(name) {
                continue;
            }
            if atlas.names.len() >= atlas.capacity() {
                dropped += 1;
                continue;
            }
            atlas.index.insert(name.to_string(), atlas.names.len());
            atlas.names.push(name.to_string());
        }
        if dropped > 0 {
            tracing::warn!(
                dropped,
                capacity = atlas.capacity(),
                "texture atlas full, extra textures fall back to tile 0"
            );
        }
        atlas
    }

    /// Atlas holding every texture the face table references.
    pub fn for_blocks(atlas_size: u32, tile_size: u32) -> Self {
        Self::new(atlas_size, tile_size, FaceTextureTable::get().unique_names())
    }

    pub fn atlas_size(&self) -> u32 {
        self.atlas_size
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn tiles_per_row(&self) -> u32 {
        self.atlas_size / self.tile_size
    }

    /// Maximum number of tiles.
    pub fn capacity(&self) -> usize {
        let per_row = self.tiles_per_row() as usize;
        per_row * per_row
    }

    /// Assigned names in tile order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn tile_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Pixel position of a tile's top-left corner.
    pub fn tile_origin_px(&self, tile: usize) -> (u32, u32) {
        let per_row = self.tiles_per_row() as usize;
        let x = (tile % per_row) as u32 * self.tile_size;
        let y = (tile / per_row) as u32 * self.tile_size;
        (x, y)
    }

    /// UV rectangle of `name`. Unknown names get tile 0.
    pub fn uv_rect(&self, name: &str) -> UvRect {
        let tile = self.tile_index(name).unwrap_or(0);
        let (x, y) = self.tile_origin_px(tile);
        let size = self.atlas_size as f32;
        let extent = self.tile_size as f32 / size;
        UvRect {
            u: x as f32 / size,
            v: y as f32 / size,
            w: extent,
            h: extent,
        }
    }
}

impl Default for TextureAtlas {
    fn default() -> Self {
        Self::for_blocks(DEFAULT_ATLAS_SIZE, DEFAULT_TILE_SIZE)
    }
}

/// Pre-resolved UV rectangle for every `(block, face)` pair.
#[derive(Clone, Debug)]
pub struct BlockUvTable {
    rects: Vec<[UvRect; 6]>,
}

impl BlockUvTable {
    pub fn new(atlas: &TextureAtlas) -> Self {
        let table = FaceTextureTable::get();
        let rects = Block::ALL
            .iter()
            .map(|&block| FaceDirection::ALL.map(|face| atlas.uv_rect(table.name(block, face))))
            .collect();
        Self { rects }
    }

    pub fn get(&self, block: Block, face: FaceDirection) -> UvRect {
        self.rects
            .get(block.index())
            .map_or(UvRect::default(), |faces| faces[face.index()])
    }
}

impl Default for BlockUvTable {
    fn default() -> Self {
        Self::new(&TextureAtlas::default())
    }
}
