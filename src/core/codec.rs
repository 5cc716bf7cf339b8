//! Conversion between a flat per-sample label column and labeled segments.
//!
//! `decode` run-length encodes a column into segments; `encode` paints
//! regions back into a column, later regions overwriting earlier ones.

use crate::state::Region;

/// A maximal run of one label value, half-open `[start, end)` in samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<T> {
    pub start: usize,
    pub end: usize,
    pub label: T,
}

/// Split a label column into segments, in index order.
///
/// A segment starts at index 0, at every change of value and at every
/// missing value. Segments starting on a missing value are dropped, so the
/// result covers exactly the non-missing runs.
pub fn decode<T: PartialEq + Clone>(column: &[Option<T>]) -> Vec<Segment<T>> {
    let boundaries: Vec<usize> = (0..column.len())
        .filter(|&i| i == 0 || column[i].is_none() || column[i] != column[i - 1])
        .collect();

    boundaries
        .iter()
        .enumerate()
        .filter_map(|(k, &start)| {
            let label = column[start].clone()?;
            let end = boundaries.get(k + 1).copied().unwrap_or(column.len());
            Some(Segment { start, end, label })
        })
        .collect()
}

/// Paint `(bounds, label)` spans into a column of `length` cells.
///
/// Bounds are rounded to the nearest sample (ties to even) and clipped to
/// the column. Spans are applied in the order given, so a later span wins
/// wherever it overlaps an earlier one. Unpainted cells are empty.
pub fn paint<'a>(spans: impl IntoIterator<Item = ((f64, f64), &'a str)>, length: usize) -> Vec<String> {
    let mut column = vec![String::new(); length];
    for ((start, end), label) in spans {
        let from = round_to_sample(start, length);
        let to = round_to_sample(end, length);
        if from >= to {
            continue;
        }
        if end.round_ties_even() > length as f64 {
            log::warn!(
                "region {:?} ends at {} past the last sample {}, clipped",
                label,
                end,
                length
            );
        }
        for cell in &mut column[from..to] {
            cell.clear();
            cell.push_str(label);
        }
    }
    column
}

/// Paint regions in collection order into a column of `length` cells.
pub fn encode<'a>(regions: impl IntoIterator<Item = &'a Region>, length: usize) -> Vec<String> {
    paint(
        regions
            .into_iter()
            .map(|region| (region.bounds(), region.label.as_str())),
        length,
    )
}

fn round_to_sample(position: f64, length: usize) -> usize {
    let rounded = position.round_ties_even();
    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else if rounded >= length as f64 {
        length
    } else {
        rounded as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Rgba;

    fn column(cells: &[&str]) -> Vec<Option<String>> {
        cells
            .iter()
            .map(|c| (!c.is_empty()).then(|| c.to_string()))
            .collect()
    }

    fn segment(start: usize, end: usize, label: &str) -> Segment<String> {
        Segment {
            start,
            end,
            label: label.to_string(),
        }
    }

    fn region(label: &str, start: f64, end: f64) -> Region {
        Region::new(label, Rgba::new(0, 0, 0, 255), (start, end))
    }

    #[test]
    fn test_decode_skips_gaps() {
        let segments = decode(&column(&["", "A", "A", "A", "", "B", "B"]));
        assert_eq!(segments, vec![segment(1, 4, "A"), segment(5, 7, "B")]);
    }

    #[test]
    fn test_decode_adjacent_runs() {
        let segments = decode(&column(&["A", "A", "B", "A"]));
        assert_eq!(
            segments,
            vec![segment(0, 2, "A"), segment(2, 3, "B"), segment(3, 4, "A")]
        );
    }

    #[test]
    fn test_decode_empty_and_all_missing() {
        assert!(decode::<String>(&[]).is_empty());
        assert!(decode(&column(&["", "", ""])).is_empty());
    }

    #[test]
    fn test_decode_generic_values() {
        let segments = decode(&[Some(3), Some(3), None, Some(4)]);
        assert_eq!(
            segments,
            vec![
                Segment { start: 0, end: 2, label: 3 },
                Segment { start: 3, end: 4, label: 4 },
            ]
        );
    }

    #[test]
    fn test_encode_disjoint_round_trip() {
        let regions = [region("A", 1.0, 4.0), region("B", 5.0, 7.0)];
        let encoded = encode(&regions, 7);
        assert_eq!(encoded, ["", "A", "A", "A", "", "B", "B"]);
        let decoded = decode(&column(&encoded.iter().map(String::as_str).collect::<Vec<_>>()));
        assert_eq!(decoded, vec![segment(1, 4, "A"), segment(5, 7, "B")]);
    }

    #[test]
    fn test_encode_later_region_wins_overlap() {
        let regions = [region("A", 0.0, 10.0), region("B", 5.0, 15.0)];
        let encoded = encode(&regions, 15);
        assert!(encoded[..5].iter().all(|c| c == "A"));
        assert!(encoded[5..].iter().all(|c| c == "B"));
    }

    #[test]
    fn test_encode_uses_insertion_not_spatial_order() {
        let regions = [region("B", 5.0, 15.0), region("A", 0.0, 10.0)];
        let encoded = encode(&regions, 15);
        assert!(encoded[..10].iter().all(|c| c == "A"));
        assert!(encoded[10..].iter().all(|c| c == "B"));
    }

    #[test]
    fn test_encode_rounds_half_to_even() {
        let encoded = paint([((0.5, 2.5), "A")], 4);
        assert_eq!(encoded, ["A", "A", "", ""]);
        let encoded = paint([((1.5, 3.5), "A")], 5);
        assert_eq!(encoded, ["", "", "A", "A", ""]);
        let encoded = paint([((0.4, 2.6), "A")], 4);
        assert_eq!(encoded, ["A", "A", "A", ""]);
    }

    #[test]
    fn test_encode_clips_to_length() {
        let encoded = encode(&[region("A", 2.0, 100.0)], 4);
        assert_eq!(encoded, ["", "", "A", "A"]);
        let encoded = encode(&[region("A", 10.0, 20.0)], 4);
        assert_eq!(encoded, ["", "", "", ""]);
    }

    #[test]
    fn test_encode_empty_region_paints_nothing() {
        let encoded = encode(&[region("A", 2.0, 2.0)], 4);
        assert!(encoded.iter().all(String::is_empty));
    }

    #[test]
    fn test_overlap_is_not_round_trip() {
        let regions = [region("A", 0.0, 10.0), region("B", 5.0, 15.0)];
        let encoded = encode(&regions, 15);
        let cells: Vec<Option<String>> = encoded.into_iter().map(Some).collect();
        assert_eq!(decode(&cells), vec![segment(0, 5, "A"), segment(5, 15, "B")]);
    }
}
