//! Row clustering
//!
//! Groups observations into horizontal bands by vertical position.

use crate::vision::TextObservation;

/// Maximum vertical distance between consecutive observations of a row,
/// as a fraction of the page height
pub const ROW_TOLERANCE: f64 = 0.05;

/// Observations sharing a horizontal band. Never empty.
pub type Row<'a> = Vec<&'a TextObservation>;

/// Cluster observations into rows, top of the page first.
///
/// Each observation is compared with the one directly above it, not with
/// the first member of its row. A long run of small steps therefore keeps
/// extending one row even once it spans more than [`ROW_TOLERANCE`].
/// Observations inside a row keep their sorted-by-height order.
pub fn cluster_rows(observations: &[TextObservation]) -> Vec<Row<'_>> {
    let mut sorted: Vec<&TextObservation> = observations.iter().collect();
    sorted.sort_by(|a, b| b.y().total_cmp(&a.y()));

    let mut rows = Vec::new();
    let mut current: Row<'_> = Vec::new();
    let mut last_y: Option<f64> = None;

    for obs in sorted {
        let y = obs.y();
        // Only a distance known to be within tolerance joins the row
        let same_row = match last_y {
            None => true,
            Some(prev) => (y - prev).abs() < ROW_TOLERANCE,
        };
        if !same_row {
            rows.push(std::mem::take(&mut current));
        }
        current.push(obs);
        last_y = Some(y);
    }

    if !current.is_empty() {
        rows.push(current);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::BoundingBox;

    fn obs(text: &str, x: f64, y: f64) -> TextObservation {
        TextObservation::new(text, BoundingBox::new(x, y, 0.1, 0.02))
    }

    fn texts(row: &Row<'_>) -> Vec<String> {
        row.iter().map(|o| o.top_text().to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(cluster_rows(&[]).is_empty());
    }

    #[test]
    fn test_rows_top_to_bottom() {
        let observations = vec![
            obs("bottom", 0.1, 0.2),
            obs("top", 0.1, 0.9),
            obs("middle", 0.1, 0.5),
        ];
        let rows = cluster_rows(&observations);

        assert_eq!(rows.len(), 3);
        assert_eq!(texts(&rows[0]), vec!["top"]);
        assert_eq!(texts(&rows[1]), vec!["middle"]);
        assert_eq!(texts(&rows[2]), vec!["bottom"]);
    }

    #[test]
    fn test_close_observations_share_row() {
        let observations = vec![
            obs("a", 0.1, 0.80),
            obs("b", 0.5, 0.82),
            obs("c", 0.1, 0.60),
            obs("d", 0.5, 0.61),
        ];
        let rows = cluster_rows(&observations);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 2);
    }

    #[test]
    fn test_tolerance_boundary_splits() {
        // One tolerance apart is not within tolerance
        let observations = vec![obs("a", 0.1, 0.55), obs("b", 0.1, 0.5)];
        let rows = cluster_rows(&observations);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_unordered_position_starts_new_row() {
        // NaN sorts above every height and is never within tolerance
        let observations = vec![
            obs("a", 0.1, 0.50),
            obs("nan", 0.1, f64::NAN),
            obs("b", 0.5, 0.51),
        ];
        let rows = cluster_rows(&observations);

        assert_eq!(rows.len(), 2);
        assert_eq!(texts(&rows[0]), vec!["nan"]);
        assert_eq!(texts(&rows[1]), vec!["b", "a"]);
    }

    #[test]
    fn test_chain_comparison_drifts() {
        // Each step is 0.04, total spread 0.16: still a single row
        let observations = vec![
            obs("a", 0.1, 0.90),
            obs("b", 0.2, 0.86),
            obs("c", 0.3, 0.82),
            obs("d", 0.4, 0.78),
            obs("e", 0.5, 0.74),
        ];
        let rows = cluster_rows(&observations);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 5);
    }

    #[test]
    fn test_no_column_ordering_within_row() {
        let observations = vec![obs("right", 0.8, 0.51), obs("left", 0.1, 0.50)];
        let rows = cluster_rows(&observations);

        assert_eq!(rows.len(), 1);
        assert_eq!(texts(&rows[0]), vec!["right", "left"]);
    }
}
