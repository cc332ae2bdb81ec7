//! Core engine for the Flipper Zero DIY agent.
//!
//! The heart of the crate is the [`markdown`] module: a total, deterministic
//! renderer for the markdown subset the hosted model emits. Around it sit the
//! boundary contracts the rest of the system plugs into: the [`gateway`]
//! trait for the generative model, the [`ingest`] reader for uploaded images,
//! and the [`session`] view-model that glues model output through the
//! renderer.

pub mod gateway;
pub mod ingest;
pub mod markdown;
pub mod session;

// Re-export key types for easier usage
pub use gateway::{
    Citation, GatewayError, GroundedText, ImagePayload, ModelGateway, ScanKind, TextOptions,
};
pub use ingest::{IngestError, read_image};
pub use markdown::{BlockNode, InlineNode, RenderedDocument, render, render_html};
pub use session::{Analysis, AnnotatedImage, ScanResult, Workbench, pinout_query};
