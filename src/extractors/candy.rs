use crate::extractors::{first_within, select_all, sources, text_of, texts, Extractor};
use crate::model::SpecRecord;
use scraper::Html;

const TERM: &str = "dt.accordion-description-list__title";
const DEFINITION: &str = "dd.accordion-description-list__description";
const DESCRIPTION: &str = "div.triplet-content__description";
const IMAGE_FRAME: &str = "div.pdp-main-info__img";

/// Candy product pages: definition lists for specs, wrapped paragraphs and images.
pub struct CandyExtractor;

impl Extractor for CandyExtractor {
    fn name(&self) -> &str {
        "candy"
    }

    fn spec(&self, document: &Html) -> SpecRecord {
        SpecRecord::new(texts(document, TERM), texts(document, DEFINITION))
    }

    fn descriptions(&self, document: &Html) -> Vec<String> {
        select_all(document, DESCRIPTION)
            .into_iter()
            .filter_map(|block| first_within(block, "p"))
            .map(text_of)
            .collect()
    }

    fn images(&self, document: &Html) -> Vec<String> {
        sources(
            select_all(document, IMAGE_FRAME)
                .into_iter()
                .filter_map(|frame| first_within(frame, "img")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_list_spec() {
        let document = Html::parse_document(
            r#"
            <dl>
                <dt class="accordion-description-list__title">Noise level</dt>
                <dd class="accordion-description-list__description">49 dB</dd>
                <dt class="accordion-description-list__title">Programs</dt>
                <dd class="accordion-description-list__description">16</dd>
            </dl>
            "#,
        );
        let spec = CandyExtractor.spec(&document);
        assert_eq!(spec.parameters, vec!["Noise level", "Programs"]);
        assert_eq!(spec.values, vec!["49 dB", "16"]);
    }

    #[test]
    fn test_descriptions_read_first_paragraph() {
        let document = Html::parse_document(
            r#"
            <div class="triplet-content__description"><h4>Title</h4><p>First</p><p>Second</p></div>
            <div class="triplet-content__description"><span>No paragraph</span></div>
            <div class="triplet-content__description"><p>Third</p></div>
            "#,
        );
        assert_eq!(CandyExtractor.descriptions(&document), vec!["First", "Third"]);
    }

    #[test]
    fn test_images_read_first_nested_image() {
        let document = Html::parse_document(
            r#"
            <div class="pdp-main-info__img"><picture><img src="front.jpg"></picture><img src="dup.jpg"></div>
            <div class="pdp-main-info__img"></div>
            <div class="pdp-main-info__img"><img src="side.jpg"></div>
            "#,
        );
        assert_eq!(CandyExtractor.images(&document), vec!["front.jpg", "side.jpg"]);
    }
}
