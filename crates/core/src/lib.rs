//! Core deck model, slide builder, course content plan and deck validation
//! for the AZ-305 training deck tooling.

pub mod builder;
pub mod error;
pub mod http;
pub mod model;
pub mod plan;
pub mod segment;
pub mod theme;
pub mod types;
pub mod validate;

pub use builder::DeckBuilder;
pub use error::{Error, Result};
pub use http::{Fetch, Fetched, HttpFetcher};
pub use model::{
    Align, BulletList, ContentBlock, Deck, Frame, Paragraph, ReviewQuestions, Run, Shape,
    ShapeKind, Slide, Table, TextBox, TextFrame, TextStyle,
};
pub use segment::{parse_slide_tag, slide_tag, Segment, SlideLayout};
pub use types::{ExtractedSlide, Presentation, PresentationFormat, SlideText};
pub use validate::{report_banner, validate, CheckResult, CheckStatus, DeckExpectations, Grade, ValidationReport};
