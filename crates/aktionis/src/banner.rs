use std::fmt::Display;

use crate::types::Deal;
use crate::utils::{ALERT_GLYPH, column_width, normalize_whitespace};

pub const BORDER: char = '#';
const INFO_PADDING: usize = 4;

/// Attention banner announcing a sale of the watched brand.
#[derive(Debug, Clone)]
pub struct Banner {
    title: String,
    info: String,
    validity: Option<String>,
}

impl Banner {
    pub fn new(brand: &str, deal: &Deal) -> Self {
        let title = format!(
            "{ALERT_GLYPH} {} IS ON SALE! {ALERT_GLYPH}",
            brand.to_uppercase()
        );
        let info = normalize_whitespace(&format!(
            "{} is on sale at {}!. The price is {}, which means a discount of {}!",
            deal.name, deal.store, deal.price, deal.discount
        ));
        let validity = (!deal.validity.is_empty())
            .then(|| normalize_whitespace(&format!("Validity: {}", deal.validity)));

        Self {
            title,
            info,
            validity,
        }
    }

    pub fn max_width(&self) -> usize {
        column_width(&self.info) + INFO_PADDING
    }

    pub fn lines(&self) -> Vec<String> {
        let width = self.max_width();
        let border: String = std::iter::repeat_n(BORDER, width).collect();

        let mut lines = vec![
            border.clone(),
            center(&self.title, width),
            center(&self.info, width),
        ];
        if let Some(validity) = &self.validity {
            lines.push(center(validity, width));
        }
        lines.push(border);
        lines
    }
}

impl Display for Banner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Centers `text` between two border characters in a row `width` columns wide.
///
/// Text is first padded to an even width; padding that does not split evenly
/// goes to the right. Text wider than the row gets no padding.
fn center(text: &str, width: usize) -> String {
    let mut padded = text.to_string();
    if column_width(&padded) % 2 == 1 {
        padded.push(' ');
    }

    let padding = width.saturating_sub(column_width(&padded) + 2);
    let left = padding / 2;
    let right = padding - left;

    format!(
        "{BORDER}{}{padded}{}{BORDER}",
        " ".repeat(left),
        " ".repeat(right)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anker_deal() -> Deal {
        Deal {
            name: "Anker PowerCore 3.2".to_string(),
            description: "3.2".to_string(),
            price: "29.95".to_string(),
            discount: "-40%".to_string(),
            store: "Digitec".to_string(),
            validity: "bis 31.10.2026".to_string(),
        }
    }

    #[test]
    fn test_banner_layout() {
        let banner = Banner::new("Anker", &anker_deal());
        let lines = banner.lines();

        let info = "Anker PowerCore 3.2 is on sale at Digitec!. The price is 29.95, which means a discount of -40%!";
        assert_eq!(banner.max_width(), info.chars().count() + 4);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "#".repeat(banner.max_width()));
        assert_eq!(lines[4], lines[0]);
        assert!(lines[1].contains("🚨 ANKER IS ON SALE! 🚨"));
        assert!(lines[2].contains(info));
        assert!(lines[3].contains("Validity: bis 31.10.2026"));
    }

    #[test]
    fn test_interior_lines_fill_max_width() {
        let banner = Banner::new("Anker", &anker_deal());
        let width = banner.max_width();

        for line in banner.lines() {
            assert_eq!(column_width(&line), width, "line {line:?}");
            assert!(line.starts_with(BORDER) && line.ends_with(BORDER));
        }
    }

    #[test]
    fn test_info_line_padding() {
        let banner = Banner::new("Anker", &anker_deal());
        let lines = banner.lines();

        // 95 columns: evened to 96, leaving a single padding column on the right.
        let info = "Anker PowerCore 3.2 is on sale at Digitec!. The price is 29.95, which means a discount of -40%!";
        assert_eq!(lines[2], format!("#{info}  #"));

        let deal = Deal {
            discount: "-45%".to_string(),
            price: "9.95".to_string(),
            ..anker_deal()
        };
        let info = "Anker PowerCore 3.2 is on sale at Digitec!. The price is 9.95, which means a discount of -45%!";
        assert_eq!(Banner::new("Anker", &deal).lines()[2], format!("# {info} #"));
    }

    #[test]
    fn test_multiline_fields_stay_within_max_width() {
        let deal = Deal {
            name: "Anker\n            PowerCore 3.2".to_string(),
            validity: "bis\n 31.10.2026".to_string(),
            ..anker_deal()
        };
        let banner = Banner::new("Anker", &deal);
        let lines = banner.lines();

        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert!(!line.contains('\n'));
            assert_eq!(column_width(line), banner.max_width(), "line {line:?}");
        }
        assert!(lines[2].contains("Anker PowerCore 3.2 is on sale"));
    }

    #[test]
    fn test_validity_line_omitted_when_empty() {
        let deal = Deal {
            validity: String::new(),
            ..anker_deal()
        };
        let lines = Banner::new("Anker", &deal).lines();

        assert_eq!(lines.len(), 4);
        assert!(!lines.iter().any(|l| l.contains("Validity")));
    }

    #[test]
    fn test_center_odd_and_even() {
        assert_eq!(center("ab", 8), "#  ab  #");
        assert_eq!(center("abc", 8), "# abc  #");
        assert_eq!(center("ab", 9), "#  ab   #");
    }

    #[test]
    fn test_center_counts_glyph_as_two_columns() {
        assert_eq!(center("🚨", 8), "#  🚨  #");
    }

    #[test]
    fn test_center_clamps_overflow() {
        assert_eq!(center("abcdefgh", 6), "#abcdefgh#");
    }
}
