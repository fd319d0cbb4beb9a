/// Upper bound on the rendered page width, in points.
pub const MAX_PAGE_WIDTH: f32 = 800.0;

/// Height of the page-sized skeleton block shown while loading, in points.
pub const SKELETON_PAGE_HEIGHT: f32 = 1132.0;

/// Delay between "page count known" and hiding the loading placeholder.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 200;

/// Longest reveal delay a config may ask for.
pub const MAX_REVEAL_DELAY_MS: u64 = 60_000;

/// Document opened when no other source is configured.
pub const DEFAULT_DOCUMENT_PATH: &str = "portfolio.pdf";

/// Character-map resources handed to the renderer.
pub const DEFAULT_CMAP_DIR: &str = "cmaps/";

/// Standard-font resources handed to the renderer.
pub const DEFAULT_STANDARD_FONT_DIR: &str = "standard_fonts/";

/// Host that remote hero images may be fetched from by default.
pub const DEFAULT_ALLOWED_IMAGE_HOST: &str = "cdn.hashnode.com";

/// Minimum lifetime of a cached remote image (~17 days).
pub const DEFAULT_IMAGE_CACHE_TTL_SECS: u64 = 1_500_000;

/// Content width at which the hero switches from stacked to two columns.
pub const HERO_TWO_COLUMN_BREAKPOINT: f32 = 768.0;

/// Name of the per-user cache and config subdirectory.
pub const APP_DIR_NAME: &str = "folio";
