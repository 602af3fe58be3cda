//! Plain-text summary of a hierarchy, printed with `--summary`.

use crate::aggregator::{HierarchyStats, NodeShare};

/// Create a text table of the largest nodes with percentage bars
pub fn generate_text_summary(shares: &[NodeShare], stats: &HierarchyStats, heading: &str) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  {}", heading));
    lines.push(format!("  ┏{}┳{}┳{}┓", "━".repeat(32), "━".repeat(10), "━".repeat(9)));
    lines.push(format!("  ┃ {:<30} ┃ {:^8} ┃ {:^7} ┃", "Label", "COUNT", "%"));
    lines.push(format!("  ┣{}╋{}╋{}┫", "━".repeat(32), "━".repeat(10), "━".repeat(9)));

    for share in shares {
        lines.push(format!(
            "  ┃ {:<30} ┃ {:>8} ┃ {:>6.1}% ┃",
            truncate(&share.label, 30),
            share.count,
            share.percentage
        ));
    }

    lines.push(format!("  ┗{}┻{}┻{}┛", "━".repeat(32), "━".repeat(10), "━".repeat(9)));

    lines.push(String::new());
    for share in shares.iter().take(5) {
        let bar = "█".repeat((share.percentage / 2.0) as usize); // Max 50 chars
        lines.push(format!(
            "  └─ {:<20} {:50} {:>5.1}%",
            truncate(&share.label, 20),
            bar,
            share.percentage
        ));
    }

    lines.push(String::new());
    lines.push(format!("  {}", stats.summary()));

    lines.join("\n")
}

/// Shorten a label to `max` characters, ending in "..."
fn truncate(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        label.to_string()
    } else {
        let head: String = label.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_text_summary() {
        let shares = vec![NodeShare {
            label: "West".to_string(),
            count: 3,
            percentage: 75.0,
        }];
        let stats = HierarchyStats {
            total: 4,
            regions: 2,
            countries: 2,
            leaves: 3,
        };

        let text = generate_text_summary(&shares, &stats, "TOP REGIONS");

        assert!(text.contains("TOP REGIONS"));
        assert!(text.contains("West"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("Regions: 2"));
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Côte d'Ivoire", 20), "Côte d'Ivoire");
        assert_eq!(truncate("Democratic Republic of the Congo", 10), "Democra...");
    }
}
