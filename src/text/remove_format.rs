//! Removing a format type from a range

use super::boundary::holds_instance;
use super::value::{format_stack, FormatStack, RichTextValue};

/// Remove `format_type` over the current selection
pub fn remove_format(value: &RichTextValue, format_type: &str) -> RichTextValue {
    remove_format_in(value, format_type, value.start(), value.end())
}

/// Remove `format_type` over `start_index..end_index`
///
/// A collapsed range is first grown to the whole run of the instance found at
/// `start_index`, so removing a link at the caret removes the entire link.
/// Positions without the format are left alone; this never fails.
pub fn remove_format_in(
    value: &RichTextValue,
    format_type: &str,
    start_index: usize,
    end_index: usize,
) -> RichTextValue {
    let mut formats = value.formats().to_vec();

    if start_index == end_index {
        let target = value.find_format_at(start_index, format_type).map(|f| f.id());

        if let Some(id) = target {
            let mut index = start_index;
            loop {
                if !holds_instance(&formats, index, id) {
                    break;
                }
                strip_format(&mut formats, index, format_type);
                if index == 0 {
                    break;
                }
                index -= 1;
            }

            let mut index = start_index + 1;
            while holds_instance(&formats, index, id) {
                strip_format(&mut formats, index, format_type);
                index += 1;
            }
        } else {
            log::trace!("no '{}' format at caret {}", format_type, start_index);
        }
    } else {
        let end = end_index.min(formats.len());
        for index in start_index..end {
            strip_format(&mut formats, index, format_type);
        }
    }

    let active_formats = value.active_formats().map(|pending| {
        pending
            .iter()
            .filter(|format| !format.is_type(format_type))
            .cloned()
            .collect()
    });

    value.with_formats(formats, active_formats)
}

/// Drop every descriptor of `format_type` at `index`; an emptied stack is unset
pub(crate) fn strip_format(formats: &mut [Option<FormatStack>], index: usize, format_type: &str) {
    let Some(stack) = formats.get(index).and_then(|stack| stack.as_deref()) else {
        return;
    };
    if !stack.iter().any(|format| format.is_type(format_type)) {
        return;
    }

    let kept = stack
        .iter()
        .filter(|format| !format.is_type(format_type))
        .cloned();
    formats[index] = format_stack(kept);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::format::FormatDescriptor;
    use std::sync::Arc;

    fn linked() -> (RichTextValue, FormatDescriptor, FormatDescriptor) {
        let link = FormatDescriptor::with_attributes("core/link", [("href", "#")]);
        let bold = FormatDescriptor::of_type("core/bold");
        let value = RichTextValue::new(
            "abcdef",
            vec![
                None,
                format_stack([link.clone()]),
                format_stack([link.clone(), bold.clone()]),
                format_stack([link.clone()]),
                format_stack([bold.clone()]),
                None,
            ],
        )
        .unwrap();
        (value, link, bold)
    }

    #[test]
    fn test_collapsed_removal_expands_to_run() {
        let (value, _, bold) = linked();
        let value = value.with_caret(2).unwrap();

        let result = remove_format(&value, "core/link");

        assert!(result.formats_at(1).is_none());
        assert_eq!(result.formats_at(2).unwrap(), &[bold.clone()][..]);
        assert!(result.formats_at(3).is_none());
        assert_eq!(result.formats_at(4).unwrap(), &[bold][..]);
        assert_eq!(result.start(), 2);
        assert_eq!(result.end(), 2);
    }

    #[test]
    fn test_collapsed_removal_at_run_start() {
        let (value, _, _) = linked();

        let result = remove_format_in(&value, "core/link", 1, 1);

        assert!((1..=3).all(|i| result.find_format_at(i, "core/link").is_none()));
    }

    #[test]
    fn test_collapsed_removal_without_format_is_noop() {
        let (value, _, _) = linked();

        let result = remove_format_in(&value, "core/link", 5, 5);

        assert_eq!(result, value);
    }

    #[test]
    fn test_range_removal_only_touches_range() {
        let (value, link, _) = linked();

        let result = remove_format_in(&value, "core/link", 2, 3);

        assert_eq!(result.formats_at(1).unwrap(), &[link.clone()][..]);
        assert!(result.find_format_at(2, "core/link").is_none());
        assert_eq!(result.formats_at(3).unwrap(), &[link][..]);
    }

    #[test]
    fn test_untouched_positions_are_shared() {
        let (value, _, _) = linked();

        let result = remove_format_in(&value, "core/bold", 4, 5);

        let before = value.formats()[2].as_ref().unwrap();
        let after = result.formats()[2].as_ref().unwrap();
        assert!(Arc::ptr_eq(before, after));
        assert!(result.formats_at(4).is_none());
    }

    #[test]
    fn test_range_past_end_is_clamped() {
        let (value, _, _) = linked();

        let result = remove_format_in(&value, "core/bold", 3, 100);

        assert!(result.formats_at(4).is_none());
        assert_eq!(result.len(), value.len());
    }

    #[test]
    fn test_inverted_range_is_noop() {
        let (value, _, _) = linked();

        assert_eq!(remove_format_in(&value, "core/link", 4, 1), value);
    }
}
