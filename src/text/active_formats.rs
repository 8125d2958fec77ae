//! Formats in effect at the current selection

use super::format::FormatDescriptor;
use super::value::RichTextValue;

/// Formats active at the selection
///
/// At a caret the pending formats win when set. Otherwise the caret takes the
/// smaller of the stacks on either side, i.e. it sits outside a boundary
/// until the user moves into the run. A range reports the instances present
/// on every character it covers.
pub fn get_active_formats(value: &RichTextValue) -> Vec<FormatDescriptor> {
    let start = value.start();

    if value.is_collapsed() {
        if let Some(pending) = value.active_formats() {
            return pending.to_vec();
        }

        let before = start
            .checked_sub(1)
            .and_then(|index| value.formats_at(index))
            .unwrap_or(&[]);
        let after = value.formats_at(start).unwrap_or(&[]);

        return if before.len() < after.len() {
            before.to_vec()
        } else {
            after.to_vec()
        };
    }

    let Some(first) = value.formats_at(start) else {
        return Vec::new();
    };

    first
        .iter()
        .filter(|format| {
            (start + 1..value.end()).all(|index| {
                value
                    .formats_at(index)
                    .map_or(false, |stack| stack.iter().any(|f| f.is_same_instance(format)))
            })
        })
        .cloned()
        .collect()
}

/// First active format of `format_type`
pub fn get_active_format(value: &RichTextValue, format_type: &str) -> Option<FormatDescriptor> {
    get_active_formats(value)
        .into_iter()
        .find(|format| format.is_type(format_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::value::format_stack;

    fn bold_run() -> (RichTextValue, FormatDescriptor) {
        let bold = FormatDescriptor::of_type("core/bold");
        let value = RichTextValue::new(
            "abcde",
            vec![
                None,
                format_stack([bold.clone()]),
                format_stack([bold.clone()]),
                format_stack([bold.clone()]),
                None,
            ],
        )
        .unwrap();
        (value, bold)
    }

    #[test]
    fn test_caret_inside_run() {
        let (value, bold) = bold_run();
        let value = value.with_caret(2).unwrap();

        assert_eq!(get_active_formats(&value), vec![bold]);
    }

    #[test]
    fn test_caret_at_edges_is_outside() {
        let (value, _) = bold_run();

        assert!(get_active_formats(&value.clone().with_caret(1).unwrap()).is_empty());
        assert!(get_active_formats(&value.with_caret(4).unwrap()).is_empty());
    }

    #[test]
    fn test_range_needs_format_everywhere() {
        let (value, bold) = bold_run();

        let inside = value.clone().with_selection(1, 4).unwrap();
        assert_eq!(get_active_format(&inside, "core/bold"), Some(bold));

        let overhanging = value.with_selection(2, 5).unwrap();
        assert_eq!(get_active_format(&overhanging, "core/bold"), None);
    }
}
