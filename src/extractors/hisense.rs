use crate::extractors::{select_all, select_within, sources, text_of, trimmed_texts, Extractor};
use crate::model::SpecRecord;
use log::debug;
use scraper::Html;

// Class order and extra classes are ignored by these selectors, on purpose.
const GROUP: &str = "div.group.group-wrap";
const DESCRIPTION: &str = "div.supporting.fadeInUp";
const IMAGE: &str = "img.attachment-half-split.size-half-split";

/// Hisense product pages: each spec group is one flat `<li>` list that
/// alternates parameter and value.
pub struct HisenseExtractor;

impl Extractor for HisenseExtractor {
    fn name(&self) -> &str {
        "hisense"
    }

    fn spec(&self, document: &Html) -> SpecRecord {
        let mut spec = SpecRecord::default();
        for group in select_all(document, GROUP) {
            let items: Vec<String> = select_within(group, "li").into_iter().map(text_of).collect();
            deinterleave(&items, &mut spec);
        }
        spec
    }

    fn descriptions(&self, document: &Html) -> Vec<String> {
        trimmed_texts(document, DESCRIPTION)
    }

    fn images(&self, document: &Html) -> Vec<String> {
        sources(select_all(document, IMAGE))
    }
}

/// Appends one group's alternating items to `spec`: even positions are
/// parameters (trimmed), odd positions their values (raw). Parity restarts
/// with every group. A trailing parameter without a value is dropped.
pub fn deinterleave<S: AsRef<str>>(items: &[S], spec: &mut SpecRecord) {
    let pairs = items.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        debug!(
            "Dropping unpaired trailing spec item {:?}",
            pairs.remainder()[0].as_ref()
        );
    }
    for pair in pairs {
        spec.push(pair[0].as_ref().trim(), pair[1].as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(items: &[&str]) -> String {
        let lis: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
        format!(r#"<div class="group group-wrap"><ul>{lis}</ul></div>"#)
    }

    #[test]
    fn test_even_group_produces_k_pairs_in_order() {
        let mut spec = SpecRecord::default();
        deinterleave(&["a", "1", "b", "2", "c", "3"], &mut spec);
        assert_eq!(spec.parameters, vec!["a", "b", "c"]);
        assert_eq!(spec.values, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_odd_group_drops_trailing_parameter() {
        let mut spec = SpecRecord::default();
        deinterleave(&["a", "1", "b"], &mut spec);
        assert_eq!(spec.parameters, vec!["a"]);
        assert_eq!(spec.values, vec!["1"]);
        assert!(spec.is_paired());
    }

    #[test]
    fn test_single_item_and_empty_groups() {
        let mut spec = SpecRecord::default();
        deinterleave(&["lonely"], &mut spec);
        deinterleave::<&str>(&[], &mut spec);
        assert!(spec.is_empty());
        assert!(spec.is_paired());
    }

    #[test]
    fn test_parity_restarts_per_group() {
        let html = format!(
            "<html><body>{}{}{}</body></html>",
            group(&[" Screen size ", "65\"", "Resolution"]),
            group(&["Refresh rate", " 120 Hz "]),
            group(&[])
        );
        let document = Html::parse_document(&html);
        let spec = HisenseExtractor.spec(&document);
        assert_eq!(spec.parameters, vec!["Screen size", "Refresh rate"]);
        assert_eq!(spec.values, vec!["65\"", " 120 Hz "]);
    }

    #[test]
    fn test_groups_need_both_classes() {
        let document = Html::parse_document(
            r#"<div class="group"><ul><li>a</li><li>1</li></ul></div>"#,
        );
        assert!(HisenseExtractor.spec(&document).is_empty());
    }

    #[test]
    fn test_descriptions_trimmed_and_images() {
        let document = Html::parse_document(
            r#"
            <div class="supporting fadeInUp">
                Dolby Vision IQ
            </div>
            <div class="supporting">Not animated</div>
            <img class="attachment-half-split size-half-split" src="//cdn.hisense.com/tv.jpg">
            <img class="attachment-half-split" src="skip.jpg">
            "#,
        );
        assert_eq!(HisenseExtractor.descriptions(&document), vec!["Dolby Vision IQ"]);
        assert_eq!(
            HisenseExtractor.images(&document),
            vec!["//cdn.hisense.com/tv.jpg"]
        );
    }
}
