//! Assistant reply capability.
//!
//! `ChatResponder` is the seam a real inference backend plugs into. The
//! bundled `CannedResponder` draws from a fixed reply set.

use super::message::PageReference;
use crate::error::Result;
use crate::random::RandomSource;
use async_trait::async_trait;
use std::sync::Arc;

pub const CANNED_REPLIES: [&str; 5] = [
    "Based on the document, I can see that this information is located in section 3.2. The key points are: 1) quarterly growth exceeded expectations, 2) new market expansion is on track, and 3) customer retention improved by 12%.",
    "The document indicates that this process involves three main steps: data collection, validation, and reporting. Each step has specific requirements and responsible parties outlined on pages 8-12.",
    "According to the analysis, the main factors contributing to this outcome were: increased operational efficiency, strategic partnerships, and improved customer engagement strategies.",
    "The document doesn't specifically address this question. Would you like me to search for related information or focus on a different aspect?",
    "I've found several relevant sections in the document. The most important information appears on page 15, which outlines the proposed timeline and resource allocation for the next quarter.",
];

const MAX_PAGE: usize = 20;
const MAX_REFERENCES: usize = 2;
const MIN_CONFIDENCE: f64 = 0.80;
const MAX_CONFIDENCE: f64 = 0.95;

/// What the responder is asked to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyPrompt<'a> {
    pub content: &'a str,
    pub document_id: Option<&'a str>,
}

/// A synthesized assistant reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub content: String,
    pub references: Vec<PageReference>,
}

#[async_trait]
pub trait ChatResponder: Send + Sync {
    async fn respond(&self, prompt: ReplyPrompt<'_>) -> Result<Reply>;
}

/// Picks one of [`CANNED_REPLIES`] uniformly at random.
///
/// When the session is anchored to a document, 1–2 page references are
/// attached with pages in `1..=20` and confidences in `[0.80, 0.95)`.
pub struct CannedResponder {
    random: Arc<dyn RandomSource>,
}

impl CannedResponder {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    fn references(&self) -> Vec<PageReference> {
        let count = 1 + self.random.index(MAX_REFERENCES);
        (0..count)
            .map(|_| PageReference {
                page: 1 + self.random.index(MAX_PAGE) as u32,
                confidence: confidence_from_unit(self.random.unit()),
            })
            .collect()
    }
}

/// Scales a `[0, 1)` draw into `[MIN_CONFIDENCE, MAX_CONFIDENCE)`.
///
/// Draws just below 1.0 round up to `MAX_CONFIDENCE` in f64, so the result
/// is pinned to the largest value below it.
fn confidence_from_unit(unit: f64) -> f64 {
    let confidence = MIN_CONFIDENCE + unit * (MAX_CONFIDENCE - MIN_CONFIDENCE);
    if confidence >= MAX_CONFIDENCE {
        f64::from_bits(MAX_CONFIDENCE.to_bits() - 1)
    } else {
        confidence.max(MIN_CONFIDENCE)
    }
}

#[async_trait]
impl ChatResponder for CannedResponder {
    async fn respond(&self, prompt: ReplyPrompt<'_>) -> Result<Reply> {
        let content = CANNED_REPLIES[self.random.index(CANNED_REPLIES.len())].to_string();
        let references = match prompt.document_id {
            Some(_) => self.references(),
            None => Vec::new(),
        };
        Ok(Reply {
            content,
            references,
        })
    }
}
