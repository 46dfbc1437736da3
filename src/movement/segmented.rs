//! Word edges inside undelimited runs, resolved from oracle tokens
//!
//! The fallback path for spans the delimited scanner refuses. Tokens come
//! from the shared segmentation service; an unavailable oracle degrades to
//! "no match" so navigation never fails on a segmentation problem.

use crate::segment::{SegmentationService, Token};

/// End of the token covering `offset` (`start <= offset < end`)
pub fn forward_token_edge(tokens: &[Token], offset: usize) -> Option<usize> {
    tokens
        .iter()
        .find(|t| t.start <= offset && t.end > offset)
        .map(|t| t.end)
}

/// Start of the token covering the char before `offset` (`start < offset <= end`)
pub fn backward_token_edge(tokens: &[Token], offset: usize) -> Option<usize> {
    tokens
        .iter()
        .find(|t| t.start < offset && t.end >= offset)
        .map(|t| t.start)
}

/// Forward word edge at `offset` of `line` from segmentation
pub fn resolve_forward(service: &SegmentationService, line: &str, offset: usize) -> Option<usize> {
    let tokens = service.segment(line).ok()?;
    forward_token_edge(&tokens, offset)
}

/// Backward word edge at `offset` of `line` from segmentation
pub fn resolve_backward(service: &SegmentationService, line: &str, offset: usize) -> Option<usize> {
    let tokens = service.segment(line).ok()?;
    backward_token_edge(&tokens, offset)
}
