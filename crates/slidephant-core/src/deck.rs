//! Deck model: the ordered slide collection.
//!
//! Two construction paths exist. `Deck::from_markdown` splits a markdown
//! document on top-level `---` thematic breaks, so a deck is authored as one
//! file with one section per slide. `DeckBuilder` registers slide sources one
//! by one for callers that assemble a deck programmatically. Either way the
//! slide count is fixed once the deck is built.

use std::path::Path;

use anyhow::{Context, Result};

/// One unit of displayed content, addressed by its ordinal position.
#[derive(Debug, Clone)]
pub struct Slide {
    source: String,
    title: Option<String>,
}

impl Slide {
    fn new(source: String) -> Self {
        let title = extract_title(&source);
        Self { source, title }
    }

    /// The slide's markdown source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The first heading in the slide, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Ordered, immutable-once-built collection of slides.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn builder() -> DeckBuilder {
        DeckBuilder::default()
    }

    /// Reads a deck from a markdown file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read deck from {}", path.display()))?;
        Ok(Self::from_markdown(&text))
    }

    /// Splits markdown into slides on thematic breaks (`---`, `***`, `___`)
    /// outside fenced code blocks. Whitespace-only sections are dropped.
    pub fn from_markdown(text: &str) -> Self {
        let mut builder = Self::builder();
        for chunk in split_slides(text) {
            builder.push_slide(chunk);
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }
}

/// Registers slides before the deck is handed to a navigator.
#[derive(Debug, Default)]
pub struct DeckBuilder {
    slides: Vec<Slide>,
}

impl DeckBuilder {
    /// Registers one slide from its markup source.
    ///
    /// Whitespace-only markup is ignored, matching how empty sections in a
    /// deck file are skipped.
    pub fn push_slide(&mut self, markup: impl Into<String>) -> &mut Self {
        let markup = markup.into();
        if !markup.trim().is_empty() {
            self.slides.push(Slide::new(markup));
        }
        self
    }

    pub fn build(&mut self) -> Deck {
        Deck {
            slides: std::mem::take(&mut self.slides),
        }
    }
}

fn split_slides(text: &str) -> Vec<String> {
    let mut slides = Vec::new();
    let mut current = String::new();
    let mut fence: Option<&'static str> = None;

    for line in text.lines() {
        let trimmed = line.trim_start();

        if let Some(marker) = fence {
            if trimmed.starts_with(marker) {
                fence = None;
            }
            current.push_str(line);
            current.push('\n');
            continue;
        }

        if trimmed.starts_with("```") {
            fence = Some("```");
        } else if trimmed.starts_with("~~~") {
            fence = Some("~~~");
        } else if is_thematic_break(line) {
            slides.push(std::mem::take(&mut current));
            continue;
        }

        current.push_str(line);
        current.push('\n');
    }
    slides.push(current);

    slides
}

/// A line of three or more identical `-`, `*`, or `_` characters, spaces
/// allowed between them.
fn is_thematic_break(line: &str) -> bool {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 3
        && ['-', '*', '_']
            .iter()
            .any(|marker| compact.chars().all(|c| c == *marker))
}

/// Extracts the text of the first ATX heading, if any.
fn extract_title(source: &str) -> Option<String> {
    source.lines().find_map(|line| {
        let trimmed = line.trim_start();
        let hashes = trimmed.chars().take_while(|c| *c == '#').count();
        if hashes == 0 || hashes > 6 {
            return None;
        }
        let rest = &trimmed[hashes..];
        if !rest.is_empty() && !rest.starts_with(' ') {
            return None;
        }
        let text = rest.trim().trim_end_matches('#').trim_end();
        (!text.is_empty()).then(|| text.to_string())
    })
}
