use crate::Point;

/// Star points (hoshi) for a square board of `size`, in row-major order.
///
/// Odd boards of 13 and up get nine points three lines in from the edge;
/// odd boards from 7 to 11 get the four corners and the center two lines in.
/// Any other size has none.
pub fn star_points(size: u8) -> Vec<Point> {
    if size < 7 || size.is_multiple_of(2) {
        return Vec::new();
    }

    let off = if size >= 13 { 3 } else { 2 };
    let far = size - 1 - off;
    let mid = size / 2;

    let lines = if size >= 13 { vec![off, mid, far] } else { vec![off, far] };

    let mut pts: Vec<Point> = lines
        .iter()
        .flat_map(|&row| lines.iter().map(move |&col| (row, col)))
        .collect();
    if size < 13 {
        pts.push((mid, mid));
        pts.sort();
    }
    pts
}
