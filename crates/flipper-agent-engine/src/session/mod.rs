//! Per-session view-model and action handlers.
//!
//! A [`Workbench`] holds what the presentation layer shows: the uploaded
//! image, the current analysis, the annotation result, and the latest scan.
//! Each action performs at most one sequential gateway call; a failure is
//! converted into a user-visible plain-text message substituted for the
//! result (and logged), never retried, and never touches any other field.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::gateway::{
    Citation, GroundedText, ImagePayload, ModelGateway, ScanKind, TextOptions, prompts,
};
use crate::markdown::{RenderedDocument, render};

const RECOGNIZE_ERROR: &str = "Sorry, I encountered an error during component recognition.";
const DATASHEET_ERROR: &str = "Sorry, I couldn't find a datasheet for that component.";
const ANNOTATE_ERROR: &str = "Sorry, I encountered an error while annotating the image.";
const PINOUT_ERROR: &str = "Sorry, I encountered an error answering that pinout question.";

/// The current analysis text, kept both as markdown source (later actions
/// append to it) and as its rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub source: String,
    pub doc: RenderedDocument,
    pub citations: Vec<Citation>,
}

/// Result of the annotate action.
///
/// There is no image-out model behind this capability, so the result is
/// typed as the placeholder it is: the unmodified original upload. Callers
/// cannot mistake it for a finished annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotatedImage {
    PlaceholderOriginal(ImagePayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub kind: ScanKind,
    pub doc: RenderedDocument,
}

/// Session state. Every render stored here replaces the previous one
/// wholesale; nothing is mutated in place.
#[derive(Debug, Default)]
pub struct Workbench {
    image: Option<ImagePayload>,
    analysis: Option<Analysis>,
    annotated: Option<AnnotatedImage>,
    scan: Option<ScanResult>,
}

impl Workbench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    pub fn annotated(&self) -> Option<&AnnotatedImage> {
        self.annotated.as_ref()
    }

    pub fn scan_result(&self) -> Option<&ScanResult> {
        self.scan.as_ref()
    }

    /// Stores a freshly ingested image and clears results derived from the
    /// previous one.
    pub fn upload(&mut self, image: ImagePayload) {
        self.image = Some(image);
        self.analysis = None;
        self.annotated = None;
    }

    /// Clears the whole session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Identifies the uploaded component. No-op without an image.
    pub fn recognize<G: ModelGateway>(&mut self, gateway: &G) {
        let Some(image) = &self.image else { return };
        let source = match gateway.generate_vision_text(image, prompts::IDENTIFY_COMPONENT) {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "component recognition failed");
                RECOGNIZE_ERROR.to_string()
            }
        };
        self.set_analysis(source, vec![]);
    }

    /// Looks up a datasheet for the component named by the current analysis
    /// and appends the findings to it. No-op without an analysis.
    pub fn find_datasheet<G: ModelGateway>(&mut self, gateway: &G) {
        let Some(analysis) = &self.analysis else { return };
        let previous = analysis.source.clone();
        let component = component_name(&previous);

        let options = TextOptions {
            system_instruction: None,
            enable_search_grounding: true,
        };
        match gateway.generate_text(&prompts::datasheet_prompt(&component), options) {
            Ok(GroundedText { text, citations }) => {
                let source = format!(
                    "{previous}\n\n---\n\n### Datasheet & Wiring Info for {component}\n\n{text}"
                );
                self.set_analysis(source, citations);
            }
            Err(err) => {
                warn!(error = %err, component = %component, "datasheet lookup failed");
                self.set_analysis(format!("{previous}\n\n---\n\n{DATASHEET_ERROR}"), vec![]);
            }
        }
    }

    /// Runs the wiring analysis and stores the placeholder annotation.
    /// No-op without an image.
    pub fn annotate<G: ModelGateway>(&mut self, gateway: &G) {
        let Some(image) = self.image.clone() else { return };
        match gateway.generate_vision_text(&image, prompts::ANNOTATE_WIRING) {
            Ok(text) => {
                self.set_analysis(text, vec![]);
                self.annotated = Some(AnnotatedImage::PlaceholderOriginal(image));
            }
            Err(err) => {
                warn!(error = %err, "wiring annotation failed");
                self.set_analysis(ANNOTATE_ERROR.to_string(), vec![]);
            }
        }
    }

    /// Runs one simulated hardware scan and stores its rendered output.
    pub fn scan<G: ModelGateway>(&mut self, gateway: &G, kind: ScanKind) {
        let options = TextOptions {
            system_instruction: Some(prompts::SCAN_SYSTEM),
            enable_search_grounding: false,
        };
        let text = match gateway.generate_text(kind.prompt(), options) {
            Ok(grounded) => grounded.text,
            Err(err) => {
                warn!(error = %err, kind = kind.label(), "scan failed");
                format!("Error performing {} scan.", kind.label())
            }
        };
        self.scan = Some(ScanResult {
            kind,
            doc: render(&text),
        });
    }

    fn set_analysis(&mut self, source: String, citations: Vec<Citation>) {
        let doc = render(&source);
        self.analysis = Some(Analysis {
            source,
            doc,
            citations,
        });
    }
}

/// Answers a free-form pinout question under the GPIO-expert instruction.
pub fn pinout_query<G: ModelGateway>(gateway: &G, query: &str) -> RenderedDocument {
    let options = TextOptions {
        system_instruction: Some(prompts::PINOUT_SYSTEM),
        enable_search_grounding: false,
    };
    let text = match gateway.generate_text(query, options) {
        Ok(grounded) => grounded.text,
        Err(err) => {
            warn!(error = %err, "pinout query failed");
            PINOUT_ERROR.to_string()
        }
    };
    render(&text)
}

/// Derives the component name from the first line of the analysis source,
/// with markdown emphasis and heading markers stripped.
fn component_name(source: &str) -> String {
    source
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| !matches!(c, '*' | '#'))
        .collect::<String>()
        .trim()
        .to_string()
}
