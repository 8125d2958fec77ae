//! Slicing, joining and normalising values

use super::format::is_format_equal;
use super::value::{FormatStack, RichTextValue};

/// Sub-value covering chars `start..end`, clamped to the text
///
/// Format instances are shared with the source, so runs cut by the slice
/// still resolve as one run. The selection collapses to 0.
pub fn slice(value: &RichTextValue, start: usize, end: usize) -> RichTextValue {
    let end = end.min(value.len());
    let start = start.min(end);

    let text: String = value.text().chars().skip(start).take(end - start).collect();
    let formats = value.formats()[start..end].to_vec();

    RichTextValue::from_parts(text, formats, 0, 0, None)
}

/// Join values in order, then normalise so equal formats across a seam
/// become one run
pub fn concat<'a>(values: impl IntoIterator<Item = &'a RichTextValue>) -> RichTextValue {
    let mut text = String::new();
    let mut formats: Vec<Option<FormatStack>> = Vec::new();

    for value in values {
        text.push_str(value.text());
        formats.extend(value.formats().iter().cloned());
    }

    normalise_formats(&RichTextValue::from_parts(text, formats, 0, 0, None))
}

/// Merge structurally equal neighbours into one instance
///
/// Where the descriptor at `(i, depth)` equals the one at `(i - 1, depth)`
/// in type and attributes but is a different instance, position `i` takes
/// the earlier instance.
pub fn normalise_formats(value: &RichTextValue) -> RichTextValue {
    let mut formats = value.formats().to_vec();
    let mut merged = 0usize;

    for index in 1..formats.len() {
        let (done, rest) = formats.split_at_mut(index);
        let (Some(previous), Some(current)) = (&done[index - 1], &mut rest[0]) else {
            continue;
        };

        let needs_merge = current.iter().zip(previous.iter()).any(|(format, prev)| {
            !format.is_same_instance(prev) && is_format_equal(format, prev)
        });
        if !needs_merge {
            continue;
        }

        let stack: Vec<_> = current
            .iter()
            .enumerate()
            .map(|(depth, format)| match previous.get(depth) {
                Some(prev) if is_format_equal(format, prev) => prev.clone(),
                _ => format.clone(),
            })
            .collect();
        *current = stack.into();
        merged += 1;
    }

    if merged > 0 {
        log::debug!("normalised formats at {} positions", merged);
    }

    value.with_formats(formats, value.active_formats().map(<[_]>::to_vec))
}
