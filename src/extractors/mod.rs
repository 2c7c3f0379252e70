use crate::error::CollectError;
use crate::model::{Extraction, Mode, SpecRecord};
use log::debug;
use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

mod candy;
mod delonghi;
mod haier;
mod hisense;

pub use self::candy::CandyExtractor;
pub use self::delonghi::DelonghiExtractor;
pub use self::haier::HaierExtractor;
pub use self::hisense::{deinterleave, HisenseExtractor};

/// Converts one manufacturer's product page into normalized records.
///
/// Missing markup never fails: each method returns an empty collection
/// when nothing on the page matches.
pub trait Extractor {
    fn name(&self) -> &str;
    fn spec(&self, document: &Html) -> SpecRecord;
    fn descriptions(&self, document: &Html) -> Vec<String>;
    fn images(&self, document: &Html) -> Vec<String>;

    fn extract(&self, document: &Html, mode: Mode) -> Extraction {
        debug!("Extracting {} with {} extractor", mode, self.name());
        match mode {
            Mode::Spec => Extraction::Spec(self.spec(document)),
            Mode::Descr => Extraction::Descr(self.descriptions(document)),
            Mode::Images => Extraction::Images(self.images(document)),
        }
    }
}

/// The closed set of supported manufacturers, chosen per job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Manufacturer {
    Haier,
    Delonghi,
    Candy,
    Hisense,
}

impl Manufacturer {
    pub const ALL: [Manufacturer; 4] = [
        Manufacturer::Haier,
        Manufacturer::Delonghi,
        Manufacturer::Candy,
        Manufacturer::Hisense,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Manufacturer::Haier => "haier",
            Manufacturer::Delonghi => "delonghi",
            Manufacturer::Candy => "candy",
            Manufacturer::Hisense => "hisense",
        }
    }

    fn extractor(&self) -> &'static dyn Extractor {
        match self {
            Manufacturer::Haier => &HaierExtractor,
            Manufacturer::Delonghi => &DelonghiExtractor,
            Manufacturer::Candy => &CandyExtractor,
            Manufacturer::Hisense => &HisenseExtractor,
        }
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Manufacturer {
    type Err = CollectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "haier" => Ok(Manufacturer::Haier),
            "delonghi" | "de'longhi" | "de-longhi" => Ok(Manufacturer::Delonghi),
            "candy" => Ok(Manufacturer::Candy),
            "hisense" => Ok(Manufacturer::Hisense),
            _ => Err(CollectError::UnknownManufacturer(s.to_string())),
        }
    }
}

impl TryFrom<String> for Manufacturer {
    type Error = CollectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Extractor for Manufacturer {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn spec(&self, document: &Html) -> SpecRecord {
        self.extractor().spec(document)
    }

    fn descriptions(&self, document: &Html) -> Vec<String> {
        self.extractor().descriptions(document)
    }

    fn images(&self, document: &Html) -> Vec<String> {
        self.extractor().images(document)
    }
}

fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            debug!("Invalid selector {}: {:?}", css, e);
            None
        }
    }
}

/// All elements in the document matching `css`, in document order.
pub(crate) fn select_all<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match parse_selector(css) {
        Some(selector) => document.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// All descendants of `element` matching `css`.
pub(crate) fn select_within<'a>(element: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match parse_selector(css) {
        Some(selector) => element.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// First descendant of `element` matching `css`.
pub(crate) fn first_within<'a>(element: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(css)?;
    element.select(&selector).next()
}

/// Concatenated text of the element and all its descendants, untrimmed.
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

pub(crate) fn texts(document: &Html, css: &str) -> Vec<String> {
    select_all(document, css).into_iter().map(text_of).collect()
}

pub(crate) fn trimmed_texts(document: &Html, css: &str) -> Vec<String> {
    select_all(document, css)
        .into_iter()
        .map(|el| text_of(el).trim().to_string())
        .collect()
}

/// `src` of each matching element; elements without one are skipped.
pub(crate) fn sources<'a, I>(elements: I) -> Vec<String>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    elements
        .into_iter()
        .filter_map(|el| el.value().attr("src"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Found;

    #[test]
    fn test_manufacturer_from_str() {
        assert_eq!("Haier".parse::<Manufacturer>().unwrap(), Manufacturer::Haier);
        assert_eq!(
            "De'Longhi".parse::<Manufacturer>().unwrap(),
            Manufacturer::Delonghi
        );
        assert_eq!(" hisense ".parse::<Manufacturer>().unwrap(), Manufacturer::Hisense);
        assert!(matches!(
            "bosch".parse::<Manufacturer>(),
            Err(CollectError::UnknownManufacturer(_))
        ));
    }

    #[test]
    fn test_manufacturer_names_round_trip() {
        for manufacturer in Manufacturer::ALL {
            assert_eq!(
                manufacturer.as_str().parse::<Manufacturer>().unwrap(),
                manufacturer
            );
            assert_eq!(manufacturer.name(), manufacturer.to_string());
        }
    }

    #[test]
    fn test_empty_document_yields_empty_shapes() {
        let document = Html::parse_document("<html><body><p>Nothing here</p></body></html>");
        for manufacturer in Manufacturer::ALL {
            for mode in [Mode::Spec, Mode::Descr, Mode::Images] {
                let extraction = manufacturer.extract(&document, mode);
                assert_eq!(extraction.mode(), mode);
                assert_eq!(
                    extraction.status(),
                    Found::Empty,
                    "{manufacturer} {mode} not empty"
                );
            }
        }
    }

    #[test]
    fn test_text_of_joins_nested_text() {
        let document = Html::parse_fragment("<div class=\"x\"> A <b>B</b> C </div>");
        assert_eq!(texts(&document, "div.x"), vec![" A B C ".to_string()]);
        assert_eq!(trimmed_texts(&document, "div.x"), vec!["A B C".to_string()]);
    }

    #[test]
    fn test_sources_skip_missing_src() {
        let document = Html::parse_fragment(r#"<img class="p" src="a.jpg"><img class="p">"#);
        assert_eq!(sources(select_all(&document, "img.p")), vec!["a.jpg".to_string()]);
    }
}
