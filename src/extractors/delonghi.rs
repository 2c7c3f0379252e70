use crate::extractors::{select_all, select_within, sources, texts, trimmed_texts, Extractor};
use crate::model::SpecRecord;
use log::debug;
use scraper::Html;

const LABEL: &str = "span.del-pdp__specifications__single__label";
const VALUE: &str = "span.del-pdp__specifications__single__value";
const DESCRIPTION: &str = "div.del-keyfeaturetile__description";
const GALLERY: &str = "section.swiper-wrapper";

/// De'Longhi product pages.
pub struct DelonghiExtractor;

impl Extractor for DelonghiExtractor {
    fn name(&self) -> &str {
        "delonghi"
    }

    fn spec(&self, document: &Html) -> SpecRecord {
        SpecRecord::new(texts(document, LABEL), trimmed_texts(document, VALUE))
    }

    fn descriptions(&self, document: &Html) -> Vec<String> {
        texts(document, DESCRIPTION)
    }

    // The first swiper on the page is the thumbnail strip; the product
    // gallery is the second one.
    fn images(&self, document: &Html) -> Vec<String> {
        match select_all(document, GALLERY).get(1) {
            Some(gallery) => sources(select_within(*gallery, "img")),
            None => {
                debug!("No product gallery swiper found");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_trimmed_labels_are_not() {
        let document = Html::parse_document(
            r#"
            <span class="del-pdp__specifications__single__label">Power </span>
            <span class="del-pdp__specifications__single__value">
                1450 W
            </span>
            "#,
        );
        let spec = DelonghiExtractor.spec(&document);
        assert_eq!(spec.parameters, vec!["Power "]);
        assert_eq!(spec.values, vec!["1450 W"]);
    }

    #[test]
    fn test_images_come_from_second_gallery() {
        let document = Html::parse_document(
            r#"
            <section class="swiper-wrapper"><img src="thumb-1.jpg"></section>
            <section class="swiper-wrapper">
                <div><img src="full-1.jpg"></div>
                <img src="full-2.jpg">
                <img alt="no source">
            </section>
            <section class="swiper-wrapper"><img src="related.jpg"></section>
            "#,
        );
        assert_eq!(
            DelonghiExtractor.images(&document),
            vec!["full-1.jpg", "full-2.jpg"]
        );
    }

    #[test]
    fn test_single_gallery_yields_no_images() {
        let document = Html::parse_document(
            r#"<section class="swiper-wrapper"><img src="thumb-1.jpg"></section>"#,
        );
        assert!(DelonghiExtractor.images(&document).is_empty());
    }

    #[test]
    fn test_descriptions() {
        let document = Html::parse_document(
            r#"<div class="del-keyfeaturetile__description">Cold brew in 5 minutes</div>"#,
        );
        assert_eq!(
            DelonghiExtractor.descriptions(&document),
            vec!["Cold brew in 5 minutes"]
        );
    }
}
