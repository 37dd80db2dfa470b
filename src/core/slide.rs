//! # Slides and Decks
//!
//! A `Slide` is plain data owned by the caller. The controller is generic
//! over its slide type and never looks inside; only the presentation layer
//! reads these fields.
//!
//! A `Deck` is the on-disk form: a TOML file with an optional deck-wide
//! image height and a `[[slides]]` array.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Image height (in rows) used when neither the slide nor the deck sets one.
pub const DEFAULT_IMG_HEIGHT: u16 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slide {
    pub image_url: String,
    pub description: String,
    #[serde(default)]
    pub attribution: Option<String>,
    /// Per-slide override of the deck's image height.
    #[serde(default)]
    pub img_height: Option<u16>,
}

impl Slide {
    pub fn new(image_url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            description: description.into(),
            attribution: None,
            img_height: None,
        }
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    pub fn with_img_height(mut self, img_height: u16) -> Self {
        self.img_height = Some(img_height);
        self
    }
}

/// Visual settings the controller carries for the presentation layer
/// without interpreting them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VisualOverrides {
    pub default_img_height: Option<u16>,
}

/// A slide paired with its resolved visual settings, ready to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideProps<'a> {
    pub slide: &'a Slide,
    pub img_height: u16,
}

impl<'a> SlideProps<'a> {
    /// Slide override → deck default → built-in default.
    pub fn resolve(slide: &'a Slide, overrides: &VisualOverrides) -> Self {
        let img_height = slide
            .img_height
            .or(overrides.default_img_height)
            .unwrap_or(DEFAULT_IMG_HEIGHT);
        Self { slide, img_height }
    }
}

// ============================================================================
// Deck loading
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Deck {
    #[serde(default)]
    pub default_img_height: Option<u16>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Debug)]
pub enum DeckError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Empty,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "deck I/O error: {e}"),
            DeckError::Parse(e) => write!(f, "deck parse error: {e}"),
            DeckError::Empty => write!(f, "deck contains no slides"),
        }
    }
}

impl std::error::Error for DeckError {}

impl Deck {
    /// Parses a deck from TOML. A deck without slides is rejected.
    pub fn parse(contents: &str) -> Result<Self, DeckError> {
        let deck: Deck = toml::from_str(contents).map_err(DeckError::Parse)?;
        if deck.slides.is_empty() {
            return Err(DeckError::Empty);
        }
        debug!("Parsed deck with {} slides", deck.slides.len());
        Ok(deck)
    }

    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let contents = fs::read_to_string(path).map_err(DeckError::Io)?;
        let deck = Self::parse(&contents)?;
        info!("Loaded {} slides from {}", deck.slides.len(), path.display());
        Ok(deck)
    }

    /// Built-in deck shown when nothing else is configured.
    pub fn sample() -> Self {
        Self {
            default_img_height: None,
            slides: vec![
                Slide::new("https://example.com/slide1.png", "Slide 1")
                    .with_attribution("Uno Pizzeria"),
                Slide::new("https://example.com/slide2.png", "Slide 2")
                    .with_attribution("Dos Equis"),
                Slide::new("https://example.com/slide3.png", "Slide 3")
                    .with_attribution("Three Amigos"),
            ],
        }
    }

    pub fn overrides(&self) -> VisualOverrides {
        VisualOverrides {
            default_img_height: self.default_img_height,
        }
    }
}
