//! Shared constants for journal generation
//!
//! This module centralizes the device geometry, typography and page
//! structure numbers used throughout layout and rendering.

use crate::types::Rgb;

// =============================================================================
// Device Geometry
// =============================================================================

/// Page width in user units (reMarkable Paper Pro Move screen)
pub const PAGE_WIDTH: f32 = 954.0;

/// Page height in user units
pub const PAGE_HEIGHT: f32 = 1696.0;

/// Height of the device toolbar band at the top of every page.
/// Nothing may be drawn above this line.
pub const TOOLBAR_HEIGHT: f32 = 130.0;

/// Left and right content margin
pub const MARGIN_SIDE: f32 = 25.0;

/// Bottom content margin
pub const MARGIN_BOTTOM: f32 = 100.0;

pub const CONTENT_LEFT: f32 = MARGIN_SIDE;
pub const CONTENT_RIGHT: f32 = PAGE_WIDTH - MARGIN_SIDE;
pub const CONTENT_TOP: f32 = TOOLBAR_HEIGHT;
pub const CONTENT_BOTTOM: f32 = PAGE_HEIGHT - MARGIN_BOTTOM;
pub const CONTENT_WIDTH: f32 = CONTENT_RIGHT - CONTENT_LEFT;
pub const CONTENT_HEIGHT: f32 = CONTENT_BOTTOM - CONTENT_TOP;

// =============================================================================
// Typography
// =============================================================================

pub const FONT_SIZE_TITLE_PAGE: f32 = 52.0;
pub const FONT_SIZE_HEADER: f32 = 32.0;
pub const FONT_SIZE_SUBHEADER: f32 = 28.0;
pub const FONT_SIZE_BODY: f32 = 32.0;
pub const FONT_SIZE_NAV: f32 = 24.0;
pub const FONT_SIZE_FOOTER: f32 = 22.0;
/// Month names on the index pages
pub const FONT_SIZE_SMALL: f32 = 24.0;
/// Day numbers on the year index
pub const FONT_SIZE_TINY: f32 = 20.0;
/// Day numbers on the monthly timeline
pub const FONT_SIZE_DAY_NUMBER: f32 = 26.0;

/// Default line height multiplier for wrapped text
pub const LINE_HEIGHT: f32 = 1.4;

/// Spacing after a subheader before its body text
pub const SUBHEADER_SPACING: f32 = 55.0;

/// Text widths are measured with Helvetica metrics and scaled by this
/// factor to approximate the narrower Garamond face.
pub const TEXT_WIDTH_SCALE: f32 = 0.95;

/// Glyph advance units per em for the embedded faces
pub const GLYPH_UNITS_PER_EM: f32 = 1000.0;

// =============================================================================
// Colors
// =============================================================================

pub const COLOR_BLACK: Rgb = Rgb::gray(0.0);
pub const COLOR_WHITE: Rgb = Rgb::gray(1.0);
pub const COLOR_GRAY: Rgb = Rgb::gray(0.5);
pub const COLOR_LINE: Rgb = Rgb::gray(0.85);

// =============================================================================
// Drawing
// =============================================================================

/// Width of light ruling lines
pub const RULE_WIDTH: f32 = 0.5;

/// Spacing between dot grid dots
pub const DOT_SPACING: f32 = 50.0;

/// Edge length of each square dot
pub const DOT_SIZE: f32 = 1.0;

/// Arrow size for main index links
pub const ARROW_SIZE_LARGE: f32 = 14.0;

/// Arrow size for week numbers and "Get started" links
pub const ARROW_SIZE_SMALL: f32 = 10.0;

/// Scale of the footer lightning icon
pub const LIGHTNING_SCALE: f32 = 1.8;

// =============================================================================
// Page Structure
// =============================================================================

pub const NUM_GUIDE_PAGES: usize = 6;
pub const NUM_FUTURE_LOG_PAGES: usize = 4;
pub const NUM_MONTHS: usize = 12;
pub const NUM_WEEKS: usize = 53;
pub const NUM_DAYS: usize = 365;
pub const NUM_COLLECTIONS_PER_INDEX: usize = 18;
pub const NUM_COLLECTION_INDEXES: usize = 2;

pub const PAGE_COVER: usize = 1;
pub const PAGE_MAIN_INDEX: usize = 2;
pub const PAGE_YEAR_INDEX: usize = 3;
pub const PAGE_COLLECTION_INDEX_C: usize = 4;
pub const PAGE_COLLECTION_INDEX_D: usize = 5;
pub const PAGE_GUIDE_START: usize = 6;
pub const PAGE_FUTURE_LOG_START: usize = PAGE_GUIDE_START + NUM_GUIDE_PAGES;
pub const PAGE_MONTHLY_START: usize = PAGE_FUTURE_LOG_START + NUM_FUTURE_LOG_PAGES;
pub const PAGE_WEEKLY_START: usize = PAGE_MONTHLY_START + NUM_MONTHS * 2;
pub const PAGE_DAILY_START: usize = PAGE_WEEKLY_START + NUM_WEEKS * 2;
pub const PAGE_COLLECTION_START: usize = PAGE_DAILY_START + NUM_DAYS;

/// Total number of pages in the journal
pub const TOTAL_PAGES: usize =
    PAGE_COLLECTION_START + NUM_COLLECTIONS_PER_INDEX * NUM_COLLECTION_INDEXES - 1;

/// Year printed on the cover. The calendar pages assume a 365-day year.
pub const COVER_YEAR: &str = "2026";
