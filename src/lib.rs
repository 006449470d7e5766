//! Renders the bilingual Tramando user manual to PDF.
//!
//! A [`model::DocumentPlan`] describes one language edition.  The
//! [`flow::FlowAssembler`] turns it into a linear sequence of layout blocks, and
//! [`builder::ManualRenderer`] lays those out with `genpdf`.  [`pipeline`] drives
//! both for every requested language.

pub mod builder;
pub mod config;
pub mod content;
pub mod elements;
pub mod error;
pub mod flow;
pub mod fonts;
pub mod image_fit;
pub mod model;
pub mod pipeline;
pub mod richtext;
pub mod style;
pub mod table;

pub use config::ManualConfig;
pub use error::{
    BuildError, ImageUnavailableError, InvalidTableShapeError, StyleError,
    UnsupportedLanguageError,
};
pub use flow::{AssembledDocument, AssetResolver, FlowAssembler, FlowProfile};
pub use model::{ContentBlock, ContentChapter, DocumentPlan, FrontMatter, Language};
pub use pipeline::{Artifact, RunReport};
pub use style::StyleRegistry;
