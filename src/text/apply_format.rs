//! Applying and toggling formats

use super::active_formats::{get_active_format, get_active_formats};
use super::format::{FormatAttributes, FormatDescriptor, FormatId};
use super::remove_format::remove_format;
use super::value::{FormatStack, RichTextValue};

/// Apply `format` over the current selection
pub fn apply_format(value: &RichTextValue, format: FormatDescriptor) -> RichTextValue {
    apply_format_in(value, format, value.start(), value.end())
}

/// Apply `format` over `start_index..end_index`
///
/// The same instance goes on every position, at the shallowest depth shared
/// by the whole range, after any existing format of the same type there is
/// dropped. Nesting order stays the same on every character of the run.
///
/// At a caret nothing is formatted: if a run of the same type holds the caret
/// its instance is swapped for `format` (e.g. changing a link target),
/// otherwise `format` becomes pending for the next typed character.
///
/// On every path, a pending format of the same type is replaced by `format`.
pub fn apply_format_in(
    value: &RichTextValue,
    format: FormatDescriptor,
    start_index: usize,
    end_index: usize,
) -> RichTextValue {
    if start_index == end_index {
        return apply_at_caret(value, format, start_index);
    }

    let end = end_index.min(value.len());
    if start_index >= end {
        log::trace!("empty range {}..{}, nothing to format", start_index, end_index);
        return value.clone();
    }

    let format_type = format.format_type().to_string();
    let stripped: Vec<Vec<FormatDescriptor>> = (start_index..end)
        .map(|index| {
            value
                .formats_at(index)
                .unwrap_or(&[])
                .iter()
                .filter(|f| !f.is_type(&format_type))
                .cloned()
                .collect()
        })
        .collect();
    let depth = stripped.iter().map(Vec::len).min().unwrap_or(0);

    let mut formats = value.formats().to_vec();
    for (offset, mut stack) in stripped.into_iter().enumerate() {
        stack.insert(depth, format.clone());
        formats[start_index + offset] = Some(stack.into());
    }

    log::debug!(
        "applied '{}' over {}..{} at depth {}",
        format_type,
        start_index,
        end,
        depth
    );

    value.with_formats(formats, replace_pending(value, &format))
}

/// Pending formats with any of `format`'s type swapped for `format`
fn replace_pending(value: &RichTextValue, format: &FormatDescriptor) -> Option<Vec<FormatDescriptor>> {
    value.active_formats().map(|pending| with_pending(pending.iter().cloned(), format))
}

fn with_pending(
    formats: impl IntoIterator<Item = FormatDescriptor>,
    format: &FormatDescriptor,
) -> Vec<FormatDescriptor> {
    let mut pending: Vec<FormatDescriptor> = formats
        .into_iter()
        .filter(|f| !f.is_type(format.format_type()))
        .collect();
    pending.push(format.clone());
    pending
}

fn apply_at_caret(value: &RichTextValue, format: FormatDescriptor, index: usize) -> RichTextValue {
    let existing = value.find_format_at(index, format.format_type()).map(|f| f.id());

    if let Some(id) = existing {
        let mut formats = value.formats().to_vec();

        let mut cursor = index;
        while replace_instance(&mut formats, cursor, id, &format) && cursor > 0 {
            cursor -= 1;
        }
        let mut cursor = index + 1;
        while replace_instance(&mut formats, cursor, id, &format) {
            cursor += 1;
        }

        log::debug!("replaced '{}' instance around caret {}", format.format_type(), index);
        return value.with_formats(formats, replace_pending(value, &format));
    }

    let pending = with_pending(get_active_formats(value), &format);
    value.with_formats(value.formats().to_vec(), Some(pending))
}

/// Swap instance `id` for `format` at `index`; false when it is not there
fn replace_instance(
    formats: &mut [Option<FormatStack>],
    index: usize,
    id: FormatId,
    format: &FormatDescriptor,
) -> bool {
    let Some(stack) = formats.get(index).and_then(|stack| stack.as_deref()) else {
        return false;
    };
    let Some(depth) = stack.iter().position(|f| f.id() == id) else {
        return false;
    };

    let mut replaced = stack.to_vec();
    replaced[depth] = format.clone();
    formats[index] = Some(replaced.into());
    true
}

/// Remove `format_type` when it is active at the selection, otherwise apply
/// a new instance of it with `attributes`
pub fn toggle_format(
    value: &RichTextValue,
    format_type: &str,
    attributes: FormatAttributes,
) -> RichTextValue {
    if get_active_format(value, format_type).is_some() {
        log::debug!("toggling '{}' off", format_type);
        remove_format(value, format_type)
    } else {
        log::debug!("toggling '{}' on", format_type);
        apply_format(value, FormatDescriptor::new(format_type, attributes))
    }
}
