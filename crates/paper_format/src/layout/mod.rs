//! Question paper layout
//!
//! Turns a normalized [`ExamPaper`] into a [`DocumentLayout`]: page setup
//! first, then header, instructions, sections and the closing caption, in
//! that fixed order. Layout is pure apart from the already-loaded images
//! it is handed.

pub mod footer;
pub mod header;
pub mod images;
pub mod instructions;
pub mod model;
pub mod page;
pub mod questions;
pub mod subparts;

use crate::layout::images::{ImageAssets, LoadedImage};
use crate::layout::model::{Block, DocumentLayout, Media, Picture};
use crate::layout::page::Presentation;
use paper_model::ExamPaper;

/// Accumulates blocks and embedded media while the passes run
pub(crate) struct LayoutContext {
    pub style: Presentation,
    body: Vec<Block>,
    media: Vec<Media>,
}

impl LayoutContext {
    fn new(style: Presentation) -> Self {
        Self {
            style,
            body: Vec::new(),
            media: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.body.push(block);
    }

    /// Register an image for embedding and return a picture sized in cm
    pub fn embed(&mut self, image: &LoadedImage, width_cm: f32, height_cm: f32) -> Picture {
        self.media.push(Media {
            format: image.info.format,
            data: image.data.clone(),
        });
        Picture {
            media: self.media.len() - 1,
            width_cm,
            height_cm,
            description: image.name.clone(),
        }
    }

    fn finish(self) -> DocumentLayout {
        DocumentLayout {
            page: self.style.page_setup(),
            presentation: self.style,
            body: self.body,
            footer: vec![footer::page_footer()],
            media: self.media,
        }
    }
}

/// Lay out a paper
///
/// `school_name` is the already-resolved header name (may be empty).
pub fn layout_paper(
    paper: &ExamPaper,
    school_name: &str,
    compact: bool,
    assets: &ImageAssets,
) -> DocumentLayout {
    let mut ctx = LayoutContext::new(Presentation::for_mode(compact));

    header::layout_header(&mut ctx, paper, school_name, assets.logo.as_ref());
    instructions::layout_instructions(&mut ctx, &paper.instructions);
    questions::layout_sections(&mut ctx, &paper.sections, &assets.questions);
    footer::layout_end_of_paper(&mut ctx);

    ctx.finish()
}
