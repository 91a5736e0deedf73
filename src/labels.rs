// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Conversion of arbitrary strings into Kubernetes label values.

/// Maximum length of a label value
pub const MAX_LABEL_VALUE_LEN: usize = 63;

/// Turn `input` into a valid label value.
///
/// Any character other than ASCII alphanumerics, `-` and `_` is replaced with `-`
/// (so dots in hostnames become dashes), the result is cut to
/// [`MAX_LABEL_VALUE_LEN`] characters and non-alphanumeric characters are then
/// trimmed from both ends. The output is either empty or a valid label value.
pub fn sanitize_label_value(input: &str) -> String {
    let replaced: String = input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .take(MAX_LABEL_VALUE_LEN)
        .collect();

    replaced
        .trim_matches(|c: char| !c.is_ascii_alphanumeric())
        .to_string()
}
