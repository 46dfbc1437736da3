//! Boundary search: the per-cursor navigation state machine
//!
//! Combines the virtual window, the delimited scanner and the segmentation
//! fallback into the three possible outcomes of one navigation call: clamp
//! at a document boundary, jump across a line break, or land on a word
//! edge.
//!
//! A separator run under the cursor is consumed as its own motion; word
//! edges resolve only from a content character. Word edges are always
//! line-local (the window never fuses words across a break); the window's
//! job is blank-line traversal and the direction-dependent carry at line
//! boundaries.

use std::sync::Arc;

use crate::document::LineSource;
use crate::error::{NavError, Result};
use crate::position::{Position, Range};
use crate::segment::SegmentationService;

use super::boundaries::{
    backward_word_edge, first_content_char, forward_word_edge, last_content_char,
};
use super::classify::is_separator;
use super::segmented;
use super::window::{Direction, TextWindow};

/// Outcome of one navigation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    /// Where the cursor lands
    pub position: Position,
    /// Span between the old and new cursor that a kill-word operation
    /// deletes; `None` for pure motion (boundary clamps and line jumps)
    pub consumed: Option<Range>,
}

/// Word-boundary navigation over a [`LineSource`]
pub struct BoundarySearch {
    segmenter: Arc<SegmentationService>,
}

impl BoundarySearch {
    pub fn new(segmenter: Arc<SegmentationService>) -> Self {
        BoundarySearch { segmenter }
    }

    /// Move one word forward from `pos`.
    ///
    /// Exactly one of three things happens: the position clamps at the
    /// document end, the cursor crosses the line break to the next
    /// non-blank line, or it lands on a word edge within the line.
    ///
    /// # Errors
    /// `OutOfRange` when `pos` lies outside the document.
    pub fn compute_forward(&self, doc: &dyn LineSource, pos: Position) -> Result<Jump> {
        let line = self.line_at(doc, pos)?;
        let line_len = line.chars().count();

        // document end: terminal, no movement
        if pos.column == line_len && pos.line + 1 >= doc.line_count() {
            return Ok(Jump {
                position: pos,
                consumed: None,
            });
        }

        let (window, cursor) = TextWindow::build(doc, pos, Direction::Forward)?;

        // at the line end: cross the break. The forward carry collapses
        // empty lines, landing at the start of the next non-blank line.
        if pos.column == line_len {
            return Ok(Jump {
                position: window.position_at(cursor),
                consumed: None,
            });
        }

        let chars: Vec<char> = window.text().chars().collect();
        let line_end = cursor - pos.column + line_len;

        if is_separator(chars[cursor]) {
            // skipping the separator run is the whole motion
            return Ok(match first_content_char(&chars[cursor..line_end]) {
                Some(off) => {
                    let landing = window.position_at(cursor + off);
                    Jump {
                        position: landing,
                        consumed: Some(Range::new(pos, landing)),
                    }
                }
                None => {
                    // the run reaches the break: consume up to the line
                    // end only, then land across it
                    let line_end_pos = Position::new(pos.line, line_len);
                    Jump {
                        position: window.position_at(line_end),
                        consumed: Some(Range::new(pos, line_end_pos)),
                    }
                }
            });
        }

        // content under the cursor: resolve the word edge line-locally,
        // delimited scan first, segmentation fallback second
        let edge = forward_word_edge(&chars[cursor..line_end])
            .map(|rel| pos.column + rel)
            .or_else(|| segmented::resolve_forward(&self.segmenter, line, pos.column));
        Ok(match edge {
            Some(column) => {
                let landing = Position::new(pos.line, column);
                Jump {
                    position: landing,
                    consumed: Some(Range::new(pos, landing)),
                }
            }
            // no resolvable edge (e.g. segmentation degraded): stay put
            None => Jump {
                position: pos,
                consumed: None,
            },
        })
    }

    /// Move one word backward from `pos`. Mirror of
    /// [`compute_forward`](Self::compute_forward).
    ///
    /// # Errors
    /// `OutOfRange` when `pos` lies outside the document.
    pub fn compute_backward(&self, doc: &dyn LineSource, pos: Position) -> Result<Jump> {
        let line = self.line_at(doc, pos)?;

        // document start: terminal
        if pos.line == 0 && pos.column == 0 {
            return Ok(Jump {
                position: pos,
                consumed: None,
            });
        }

        let (window, cursor) = TextWindow::build(doc, pos, Direction::Backward)?;

        // at the line start: cross the break to the end of the previous
        // non-blank line
        if pos.column == 0 {
            return Ok(Jump {
                position: window.position_at(cursor),
                consumed: None,
            });
        }

        let chars: Vec<char> = window.text().chars().collect();
        let line_start = cursor - pos.column;

        if is_separator(chars[cursor - 1]) {
            return Ok(match last_content_char(&chars[line_start..cursor]) {
                Some(off) => {
                    let landing = window.position_at(line_start + off + 1);
                    Jump {
                        position: landing,
                        consumed: Some(Range::new(landing, pos)),
                    }
                }
                None => {
                    // the run reaches the line start: consume from it,
                    // then land across the break
                    let line_start_pos = Position::new(pos.line, 0);
                    Jump {
                        position: window.position_at(line_start),
                        consumed: Some(Range::new(line_start_pos, pos)),
                    }
                }
            });
        }

        let edge = backward_word_edge(&chars[line_start..cursor])
            .or_else(|| segmented::resolve_backward(&self.segmenter, line, pos.column));
        Ok(match edge {
            Some(column) => {
                let landing = Position::new(pos.line, column);
                Jump {
                    position: landing,
                    consumed: Some(Range::new(landing, pos)),
                }
            }
            None => Jump {
                position: pos,
                consumed: None,
            },
        })
    }

    /// Forward edge only, for extending a selection's active end; the
    /// anchor endpoint is the caller's to keep
    pub fn extend_forward(&self, doc: &dyn LineSource, pos: Position) -> Result<Position> {
        Ok(self.compute_forward(doc, pos)?.position)
    }

    /// Backward edge only, for extending a selection's active end
    pub fn extend_backward(&self, doc: &dyn LineSource, pos: Position) -> Result<Position> {
        Ok(self.compute_backward(doc, pos)?.position)
    }

    /// The word span containing (or adjacent to) `pos`, for
    /// click-to-select-word.
    ///
    /// The start is resolved looking backward from `column + 1`, so a
    /// cursor sitting on a word's first character still finds it; the end
    /// forward from `column`. `None` when either side has no resolvable
    /// word.
    ///
    /// # Errors
    /// `OutOfRange` when `pos` lies outside the document.
    pub fn word_span_at(&self, doc: &dyn LineSource, pos: Position) -> Result<Option<Range>> {
        let line = self.line_at(doc, pos)?;
        let chars: Vec<char> = line.chars().collect();
        let anchor = (pos.column + 1).min(chars.len());

        let start = match backward_word_edge(&chars[..anchor])
            .or_else(|| segmented::resolve_backward(&self.segmenter, line, anchor))
        {
            Some(start) => start,
            None => return Ok(None),
        };

        let end = match forward_word_edge(&chars[pos.column..])
            .map(|rel| pos.column + rel)
            .or_else(|| segmented::resolve_forward(&self.segmenter, line, pos.column))
        {
            Some(end) => end,
            None => return Ok(None),
        };

        Ok(Some(Range::new(
            Position::new(pos.line, start),
            Position::new(pos.line, end),
        )))
    }

    /// Validate `pos` and fetch its line; integration bugs fail loudly
    fn line_at<'a>(&self, doc: &'a dyn LineSource, pos: Position) -> Result<&'a str> {
        let text = doc.line(pos.line).ok_or_else(|| {
            NavError::out_of_range(format!(
                "line {} outside document of {} lines",
                pos.line,
                doc.line_count()
            ))
        })?;
        let len = text.chars().count();
        if pos.column > len {
            return Err(NavError::out_of_range(format!(
                "column {} beyond line {} of length {}",
                pos.column, pos.line, len
            )));
        }
        Ok(text)
    }
}
