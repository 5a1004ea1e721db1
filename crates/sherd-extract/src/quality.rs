//! Extraction quality indicators.

use sherd_core::models::{DescriptiveMetadata, ExtractionQuality};

/// Presence indicators for the attribute lists of `descriptive`.
pub fn assess(descriptive: &DescriptiveMetadata) -> ExtractionQuality {
    ExtractionQuality {
        has_color: !descriptive.colored_drawing.is_empty(),
        has_decoration: !descriptive.decorations.is_empty(),
        has_shape: !descriptive.shape.is_empty(),
        has_function: !descriptive.function.is_empty(),
        has_material: !descriptive.paste.is_empty(),
        has_glaze: !descriptive.glaze.is_empty(),
        has_place: !descriptive.production_place.is_empty(),
        has_inscription: !descriptive.inscriptions.is_empty(),
    }
}
