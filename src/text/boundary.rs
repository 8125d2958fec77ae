//! Format boundary resolution
//!
//! Finds the run of one format instance that a caret or selection sits in,
//! at the edge of, or just past. Used to expand a caret into "the whole
//! link" before editing or removing it.

use super::format::{FormatDescriptor, FormatId};
use super::value::{FormatStack, RichTextValue};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// First and last index of a run, or nulls when no run was found
///
/// `end` is the index of the last character carrying the format. Use
/// [`FormatBoundary::range`] for a half-open range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatBoundary {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl FormatBoundary {
    pub const EMPTY: FormatBoundary = FormatBoundary {
        start: None,
        end: None,
    };

    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() || self.end.is_none()
    }

    /// The run as `first..last + 1`
    pub fn range(&self) -> Option<Range<usize>> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(start..end + 1),
            _ => None,
        }
    }
}

/// Resolve the run of `format_type` anchored at `start_index`/`end_index`
///
/// The anchors are probed in order: `start_index`, `end_index`, then
/// `end_index - 1` for a caret resting one past the trailing edge. The first
/// probe that holds a descriptor of the type picks the instance; the run is
/// then every adjacent position whose stack holds that instance.
/// Anchors may be negative, inverted or beyond the text: invalid ones simply
/// find nothing.
pub fn get_format_boundary(
    value: &RichTextValue,
    format_type: &str,
    start_index: isize,
    end_index: isize,
) -> FormatBoundary {
    let formats = value.formats();
    if formats.is_empty() {
        return FormatBoundary::EMPTY;
    }

    let anchored = probe_at(value, format_type, start_index)
        .or_else(|| probe_at(value, format_type, end_index))
        .or_else(|| {
            end_index
                .checked_sub(1)
                .and_then(|index| probe_at(value, format_type, index))
        });

    let Some((initial_index, target)) = anchored else {
        log::trace!(
            "no '{}' format at {}..{}",
            format_type,
            start_index,
            end_index
        );
        return FormatBoundary::EMPTY;
    };

    let target_id = target.id();
    let start = walk_to_start(formats, initial_index, target_id);
    let end = walk_to_end(formats, initial_index, target_id);

    log::debug!(
        "'{}' run from {}..{} resolved to [{}, {}]",
        format_type,
        start_index,
        end_index,
        start,
        end
    );

    FormatBoundary::new(start, end)
}

impl RichTextValue {
    /// Run of `format_type` around the current selection
    pub fn format_boundary(&self, format_type: &str) -> FormatBoundary {
        get_format_boundary(
            self,
            format_type,
            to_signed(self.start()),
            to_signed(self.end()),
        )
    }
}

/// Descriptor of `format_type` at a signed probe position, with that position
fn probe_at<'a>(
    value: &'a RichTextValue,
    format_type: &str,
    index: isize,
) -> Option<(usize, &'a FormatDescriptor)> {
    let found = value
        .formats_at_signed(index)?
        .iter()
        .find(|format| format.is_type(format_type))?;
    Some((usize::try_from(index).ok()?, found))
}

/// Whether the stack at `index` holds instance `id`
pub(crate) fn holds_instance(formats: &[Option<FormatStack>], index: usize, id: FormatId) -> bool {
    formats
        .get(index)
        .and_then(|stack| stack.as_deref())
        .map_or(false, |stack| stack.iter().any(|format| format.id() == id))
}

fn walk_to_start(formats: &[Option<FormatStack>], initial: usize, id: FormatId) -> usize {
    let mut index = initial;
    while index > 0 && holds_instance(formats, index - 1, id) {
        index -= 1;
    }
    index
}

fn walk_to_end(formats: &[Option<FormatStack>], initial: usize, id: FormatId) -> usize {
    let mut index = initial;
    while holds_instance(formats, index + 1, id) {
        index += 1;
    }
    index
}

pub(crate) fn to_signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::value::format_stack;

    fn bold_value() -> RichTextValue {
        let bold = FormatDescriptor::of_type("core/bold");
        let mut formats = vec![None; 9];
        for slot in formats.iter_mut().take(7).skip(4) {
            *slot = format_stack([bold.clone()]);
        }
        RichTextValue::new("012345678", formats).unwrap()
    }

    #[test]
    fn test_empty_formats_give_empty_boundary() {
        let value = RichTextValue::empty();

        assert_eq!(get_format_boundary(&value, "core/bold", 0, 0), FormatBoundary::EMPTY);
        assert!(value.format_boundary("core/bold").is_empty());
    }

    #[test]
    fn test_run_at_zero_does_not_underflow() {
        let bold = FormatDescriptor::of_type("core/bold");
        let value = RichTextValue::new(
            "abc",
            vec![format_stack([bold.clone()]), format_stack([bold]), None],
        )
        .unwrap();

        assert_eq!(get_format_boundary(&value, "core/bold", 0, 0), FormatBoundary::new(0, 1));
    }

    #[test]
    fn test_inverted_and_negative_anchors() {
        let value = bold_value();

        assert_eq!(get_format_boundary(&value, "core/bold", 4, 1), FormatBoundary::new(4, 6));
        assert_eq!(get_format_boundary(&value, "core/bold", -1000, 4), FormatBoundary::new(4, 6));
        assert_eq!(
            get_format_boundary(&value, "core/bold", isize::MIN, isize::MIN),
            FormatBoundary::EMPTY
        );
    }

    #[test]
    fn test_anchors_beyond_text() {
        let value = bold_value();

        assert_eq!(get_format_boundary(&value, "core/bold", 40, 50), FormatBoundary::EMPTY);
    }

    #[test]
    fn test_range_is_half_open() {
        assert_eq!(FormatBoundary::new(4, 6).range(), Some(4..7));
        assert_eq!(FormatBoundary::EMPTY.range(), None);
    }

    #[test]
    fn test_run_followed_across_depths() {
        let italic = FormatDescriptor::of_type("core/italic");
        let link = FormatDescriptor::of_type("core/link");
        let value = RichTextValue::new(
            "abc",
            vec![
                format_stack([italic.clone()]),
                format_stack([link, italic.clone()]),
                format_stack([italic]),
            ],
        )
        .unwrap();

        assert_eq!(get_format_boundary(&value, "core/italic", 2, 2), FormatBoundary::new(0, 2));
    }

    #[test]
    fn test_adjacent_equal_runs_stay_separate() {
        let first = FormatDescriptor::of_type("core/bold");
        let second = FormatDescriptor::of_type("core/bold");
        let value = RichTextValue::new(
            "abcd",
            vec![
                format_stack([first.clone()]),
                format_stack([first]),
                format_stack([second.clone()]),
                format_stack([second]),
            ],
        )
        .unwrap();

        assert_eq!(get_format_boundary(&value, "core/bold", 1, 1), FormatBoundary::new(0, 1));
        assert_eq!(get_format_boundary(&value, "core/bold", 2, 2), FormatBoundary::new(2, 3));
    }
}
