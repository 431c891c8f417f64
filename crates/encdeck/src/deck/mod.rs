pub mod content;

use eframe::egui::Color32;

pub const DOC_TITLE: &str = "Pentaform AI Ecosystem";
pub const DOC_PAGE_COUNT: u32 = 18;

#[derive(Debug, Clone)]
pub struct Deck {
    pub title: String,
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.slides.len().saturating_sub(1)
    }
}

/// One slide, addressed by its position in the deck.
///
/// Exactly one of `doc_page` and a non-empty `body` is meaningful: document
/// slides embed a page of the ecosystem PDF and carry no composed content.
#[derive(Debug, Clone)]
pub struct Slide {
    pub title: String,
    pub kicker: String,
    pub body: Vec<Block>,
    pub notes: Option<String>,
    pub compact_heading: bool,
    /// Decorative panel shown beside the content. `None` renders the body
    /// single-column.
    pub graphic: Option<GraphicKind>,
    /// 1-based page of the embedded document.
    pub doc_page: Option<u32>,
}

impl Slide {
    fn document_page(page: u32) -> Self {
        Self {
            title: format!("{DOC_TITLE} \u{00b7} {page}"),
            kicker: DOC_TITLE.to_string(),
            body: Vec::new(),
            notes: Some(format!("Source PDF page {page}.")),
            compact_heading: false,
            graphic: None,
            doc_page: Some(page),
        }
    }
}

/// Body content blocks, laid out top to bottom in the content column.
#[derive(Debug, Clone)]
pub enum Block {
    /// Lead paragraph with inline emphasis.
    Paragraph { spans: Vec<Span> },
    /// Two-column grid of small title + detail cards.
    Cards { items: Vec<Card> },
    /// Two-column grid of titled bullet panels.
    Panels { items: Vec<Panel> },
    /// Full-width emphasized box.
    Callout { spans: Vec<Span> },
    /// Model catalogue cards with fit badge, facts, and link.
    ModelCards { items: Vec<ModelCard> },
}

#[derive(Debug, Clone)]
pub enum Span {
    Text(String),
    Strong(String),
}

impl Span {
    pub fn text(s: &str) -> Self {
        Self::Text(s.to_string())
    }

    pub fn strong(s: &str) -> Self {
        Self::Strong(s.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Card {
    pub title: String,
    /// Empty string when the card is title-only.
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ModelCard {
    pub name: String,
    pub why: String,
    pub fit: String,
    pub url: String,
    pub tint: Color32,
    pub facts: Vec<(String, String)>,
}

/// The authored decorative panels. Each slide that shows one names its
/// variant explicitly; there is no positional dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicKind {
    SharedCore,
    DecisionSurface,
    FitMap,
    ReadinessRadar,
    MemoryGraph,
    CompanionOrbit,
}

impl GraphicKind {
    pub const ALL: [GraphicKind; 6] = [
        GraphicKind::SharedCore,
        GraphicKind::DecisionSurface,
        GraphicKind::FitMap,
        GraphicKind::ReadinessRadar,
        GraphicKind::MemoryGraph,
        GraphicKind::CompanionOrbit,
    ];
}

/// Assemble the full deck: the embedded document pages first, then the
/// hand-authored workshop slides.
pub fn build() -> Deck {
    let mut slides: Vec<Slide> = (1..=DOC_PAGE_COUNT).map(Slide::document_page).collect();
    slides.extend(content::workshop_slides());
    Deck {
        title: "Encode Workshop Deck".to_string(),
        slides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_shape() {
        let deck = build();
        assert_eq!(deck.len(), DOC_PAGE_COUNT as usize + 4);
        assert_eq!(deck.last_index(), deck.len() - 1);
    }

    #[test]
    fn test_document_pages_contiguous() {
        let deck = build();
        for (i, slide) in deck.slides[..DOC_PAGE_COUNT as usize].iter().enumerate() {
            assert_eq!(slide.doc_page, Some(i as u32 + 1));
            assert!(slide.body.is_empty());
        }
    }

    #[test]
    fn test_body_and_doc_page_exclusive() {
        // Every slide is either a document page or a composed content slide,
        // never both and never neither.
        for slide in build().slides {
            assert_ne!(
                slide.doc_page.is_some(),
                !slide.body.is_empty(),
                "slide {:?} mixes document page and body content",
                slide.title
            );
        }
    }

    #[test]
    fn test_workshop_slides_have_notes() {
        let deck = build();
        for slide in &deck.slides[DOC_PAGE_COUNT as usize..] {
            assert!(slide.notes.is_some(), "no notes on {:?}", slide.title);
        }
    }

    #[test]
    fn test_graphics_only_on_content_slides() {
        for slide in build().slides {
            if slide.graphic.is_some() {
                assert!(slide.doc_page.is_none());
            }
        }
    }
}
