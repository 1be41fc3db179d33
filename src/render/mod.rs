//! Overlay renderer: visual tree -> flexbox layout -> SVG -> transparent PNG.

pub(crate) mod layout;
mod overlay;
pub(crate) mod svg;
pub(crate) mod text;

pub use overlay::OverlayRenderer;
