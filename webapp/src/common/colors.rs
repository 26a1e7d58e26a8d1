// colors that come from data rather than from the stylesheet

use api::recording::ProcessingStatus;

use crate::common::theme::{DARK, PRIMARY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Pending,
    Working,
    Done,
    Failed,
}

impl StatusTone {
    pub fn for_status(status: &ProcessingStatus) -> Self {
        match status {
            ProcessingStatus::Pending | ProcessingStatus::Other(_) => Self::Pending,
            ProcessingStatus::Processing
            | ProcessingStatus::Analyzing
            | ProcessingStatus::GeneratingVisuals => Self::Working,
            ProcessingStatus::Completed => Self::Done,
            ProcessingStatus::Failed => Self::Failed,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge-pending",
            Self::Working => "badge badge-working",
            Self::Done => "badge badge-done",
            Self::Failed => "badge badge-failed",
        }
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |idx: usize| u8::from_str_radix(&digits[idx..idx + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

// label colors are user supplied and end up in an inline style attribute,
// so only a plain #rrggbb ever gets through
pub fn label_color(hex: &str) -> &str {
    match parse_hex(hex) {
        Some(_) => hex,
        None => PRIMARY.shades[5],
    }
}

// pick light or dark text for a label chip based on the background luminance
pub fn text_on(hex: &str) -> &'static str {
    let Some((r, g, b)) = parse_hex(hex) else {
        return "#FFFFFF";
    };

    let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    if luma > 160.0 { DARK.shades[9] } else { "#FFFFFF" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tones() {
        assert_eq!(StatusTone::for_status(&ProcessingStatus::Analyzing), StatusTone::Working);
        assert_eq!(StatusTone::for_status(&ProcessingStatus::Completed), StatusTone::Done);
        assert_eq!(
            StatusTone::for_status(&ProcessingStatus::Other(String::from("queued"))),
            StatusTone::Pending
        );
        assert_eq!(StatusTone::Failed.css_class(), "badge badge-failed");
    }

    #[test]
    fn label_colors_are_sanitized() {
        assert_eq!(label_color("#1a2B3c"), "#1a2B3c");
        assert_eq!(label_color("red"), "#25c5bb");
        assert_eq!(label_color("#fff"), "#25c5bb");
        assert_eq!(label_color("#123456; background: url(x)"), "#25c5bb");
    }

    #[test]
    fn chip_text_contrast() {
        assert_eq!(text_on("#ffffff"), "#042428");
        assert_eq!(text_on("#fbdc9d"), "#042428");
        assert_eq!(text_on("#134e4a"), "#FFFFFF");
        assert_eq!(text_on("nonsense"), "#FFFFFF");
    }
}
