//! Scan Simulator
//!
//! Stands in for a camera pipeline: picks a product and invents a detection
//! for it. The random source is a parameter so tests can seed it.

use rand::Rng;
use rand::seq::SliceRandom;
use shared::models::{BoundingBox, Product, VisionStatus};

/// Four OK for every DAMAGED and every NON_STANDARD
const STATUS_WEIGHTS: [VisionStatus; 6] = [
    VisionStatus::Ok,
    VisionStatus::Ok,
    VisionStatus::Ok,
    VisionStatus::Ok,
    VisionStatus::Damaged,
    VisionStatus::NonStandard,
];

const CONFIDENCE_RANGE: std::ops::RangeInclusive<f64> = 0.65..=1.0;
const POSITION_RANGE: std::ops::RangeInclusive<i64> = 50..=200;
const SIZE_RANGE: std::ops::RangeInclusive<i64> = 100..=300;

const COLORS: [&str; 5] = ["Oak Brown", "Steel Gray", "Natural Wood", "Matte Black", "Glossy White"];
const TEXTURES: [&str; 5] = ["Smooth", "Rough", "Polished", "Grainy", "Textured"];
const DIMENSIONS: [&str; 4] = ["50x50x90", "120x80x75", "60x20x30", "80x40x45"];

/// Appearance attributes reported with a clean detection
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedAttributes {
    pub color: String,
    pub texture: String,
    pub dimensions: String,
}

/// One simulated detection
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub product_id: i64,
    pub product_name: String,
    pub sku: String,
    pub status: VisionStatus,
    pub confidence_score: f64,
    pub bounding_box: BoundingBox,
    pub detected_class: String,
    pub notes: Option<String>,
    /// Only present for OK detections
    pub attributes: Option<DetectedAttributes>,
}

/// Class label derived from a SKU: everything after the first `-`
pub fn detected_class(sku: &str) -> &str {
    sku.split_once('-').map_or(sku, |(_, rest)| rest)
}

/// Operator note for a status, `None` when nothing needs attention
pub fn status_note(status: VisionStatus) -> Option<&'static str> {
    match status {
        VisionStatus::Damaged => Some("Potential damage detected - surface irregularities observed"),
        VisionStatus::NonStandard => {
            Some("Dimensions or appearance do not match standard specifications")
        }
        VisionStatus::Ok | VisionStatus::Unknown => None,
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, values: &[&str]) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}

/// Simulate a detection of a uniformly chosen product
///
/// Returns `None` when there is nothing to scan.
pub fn simulate<R: Rng + ?Sized>(rng: &mut R, products: &[Product]) -> Option<Detection> {
    let product = products.choose(rng)?;

    let confidence_score = rng.gen_range(CONFIDENCE_RANGE);
    let status = *STATUS_WEIGHTS.choose(rng)?;
    let bounding_box = BoundingBox {
        x: rng.gen_range(POSITION_RANGE),
        y: rng.gen_range(POSITION_RANGE),
        width: rng.gen_range(SIZE_RANGE),
        height: rng.gen_range(SIZE_RANGE),
    };

    let attributes = (status == VisionStatus::Ok).then(|| DetectedAttributes {
        color: pick(rng, &COLORS),
        texture: pick(rng, &TEXTURES),
        dimensions: pick(rng, &DIMENSIONS),
    });

    Some(Detection {
        product_id: product.id,
        product_name: product.name.clone(),
        sku: product.sku.clone(),
        status,
        confidence_score,
        bounding_box,
        detected_class: detected_class(&product.sku).to_string(),
        notes: status_note(status).map(str::to_string),
        attributes,
    })
}
