use crate::extractors::{select_all, sources, texts, Extractor};
use crate::model::SpecRecord;
use scraper::Html;

// Compound class selectors also match elements carrying extra classes; that
// looser match is intended.
const LABEL: &str = "div.col-md-8.font-light";
const VALUE: &str = "div.col-md-4.font-regular";
const DESCRIPTION: &str = "div.items-grid__item-subtitle--pdp";
const IMAGE: &str = "img.slider-img-prod__img";

/// Haier product pages: bootstrap grid rows of label and value columns.
pub struct HaierExtractor;

impl Extractor for HaierExtractor {
    fn name(&self) -> &str {
        "haier"
    }

    fn spec(&self, document: &Html) -> SpecRecord {
        SpecRecord::new(texts(document, LABEL), texts(document, VALUE))
    }

    fn descriptions(&self, document: &Html) -> Vec<String> {
        texts(document, DESCRIPTION)
    }

    fn images(&self, document: &Html) -> Vec<String> {
        sources(select_all(document, IMAGE))
    }
}
