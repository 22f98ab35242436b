//! Built-in rule lists, defaults and output naming

/// Side length in pixels of one block texture
pub const SWATCH_SIZE: u32 = 16;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed blueprint dimension in tiles
pub const MAX_GRID_DIMENSION: u32 = 10_000;

/// File extension of swatch candidates
pub const SWATCH_EXTENSION: &str = "png";

/// Image formats accepted as conversion input
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "webp"];

/// Default directory holding block textures
pub const DEFAULT_TEXTURES_DIR: &str = "block_textures";

/// Default language file used for localized blueprints
pub const DEFAULT_LANG_FILE: &str = "zh_cn.json";

/// Key prefix of block entries in the language file
pub const TRANSLATION_NAMESPACE: &str = "block.minecraft.";

// Only names containing one of these are considered for the palette
/// Substrings a texture name must contain to be cataloged
pub const DEFAULT_WHITELIST: &[&str] = &[
    "wool",
    "concrete",
    "terracotta",
    "stained_glass",
    "planks",
    "oak_log",
    "spruce_log",
    "birch_log",
    "jungle_log",
    "acacia_log",
    "dark_oak_log",
    "mangrove_log",
    "cherry_log",
    "stripped_oak_log",
    "stripped_spruce_log",
    "stripped_birch_log",
    "stripped_jungle_log",
    "stripped_acacia_log",
    "stripped_dark_oak_log",
    "stripped_mangrove_log",
    "stripped_cherry_log",
    "crimson_stem",
    "warped_stem",
    "stripped_crimson_stem",
    "stripped_warped_stem",
    "bamboo",
    "hay_block",
    "piston",
    "mushroom",
    "dirt",
    "coarse_dirt",
    "rooted_dirt",
    "sand",
    "red_sand",
    "gravel",
    "clay",
    "stone",
    "cobblestone",
    "andesite",
    "diorite",
    "granite",
    "deepslate",
    "sandstone",
    "red_sandstone",
    "moss_block",
    "mud",
    "coal_block",
    "iron_block",
    "gold_block",
    "redstone_block",
    "lapis_block",
    "emerald_block",
    "diamond_block",
    "dried_kelp_block",
    "glowstone",
    "snow_block",
    "copper_block",
    "cut_copper",
    "exposed_copper",
    "exposed_cut_copper",
    "weathered_copper",
    "weathered_cut_copper",
    "oxidized_copper",
    "oxidized_cut_copper",
    "raw_copper_block",
    "netherrack",
    "nether_wart_block",
    "warped_wart_block",
    "soul_sand",
    "soul_soil",
    "blackstone",
];

// Checked before the whitelist, so one token can drop a whole family
/// Substrings that exclude a texture name outright
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "ore",
    "door",
    "rail",
    "sapling",
    "potted",
    "pane",
    "shulker_box",
    "banner",
    "bed",
    "coral_fan",
    "reinforced_deepslate",
    "copper_bulb",
    "mushroom",
    "piston",
    "suspicious",
];

/// Positional suffixes and the descriptor appended to a localized base name
pub const DEFAULT_SUFFIX_DESCRIPTORS: &[(&str, &str)] = &[
    ("_top", " (顶部)"),
    ("_side", " (侧面)"),
    ("_bottom", " (底部)"),
    ("_front", " (正面)"),
    ("_end", " (末端)"),
    ("_lock", " (锁定)"),
    ("_on", " (开启)"),
    ("_stage", " (阶段)"),
    ("_age", " (阶段)"),
];

// Output settings
/// Suffix added to per-input output folders
pub const OUTPUT_SUFFIX: &str = "_mapart_output";
/// Blueprint table with canonical names
pub const BLUEPRINT_FILE: &str = "blueprint_en.csv";
/// Blueprint table with localized names
pub const LOCALIZED_BLUEPRINT_FILE: &str = "blueprint_cn.csv";
/// Stitched texture preview
pub const PREVIEW_FILE: &str = "preview.png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
