//! Template layout engine: [`ThumbnailConfig`] -> visual tree.
//!
//! Every function here is pure; the same config always produces the same tree.

mod comparison;
mod conversion;
mod feature;
pub(crate) mod shared;
mod speed;
mod trust;

use crate::analysis::{Template, ThumbnailConfig};
use crate::scene::Node;

/// Build the overlay tree for `config`, dispatching on its template.
pub fn build_scene(config: &ThumbnailConfig) -> Node {
    match config.template {
        Template::Speed => speed::build(config),
        Template::Conversion => conversion::build(config),
        Template::Comparison => comparison::build(config),
        Template::Feature => feature::build(config),
        Template::Trust => trust::build(config),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/templates/templates.rs"]
mod tests;
