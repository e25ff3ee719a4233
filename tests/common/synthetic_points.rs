/// `cols x rows` lattice of points with the given spacing, lower-left corner
/// at `origin`.
pub fn lattice_clump(origin: [f32; 2], cols: usize, rows: usize, spacing: f32) -> [Vec<f32>; 2] {
    assert!(cols > 0 && rows > 0, "lattice must not be empty");
    let mut xs = Vec::with_capacity(cols * rows);
    let mut ys = Vec::with_capacity(cols * rows);
    for r in 0..rows {
        for c in 0..cols {
            xs.push(origin[0] + c as f32 * spacing);
            ys.push(origin[1] + r as f32 * spacing);
        }
    }
    [xs, ys]
}

/// Append point sets dimension by dimension.
pub fn concat<const N: usize>(parts: Vec<[Vec<f32>; N]>) -> [Vec<f32>; N] {
    let mut out: [Vec<f32>; N] = std::array::from_fn(|_| Vec::new());
    for part in parts {
        for (axis, values) in out.iter_mut().zip(part) {
            axis.extend(values);
        }
    }
    out
}

/// Follow nearest-higher links from `start` until a seed or a point without
/// a link, and return that point.
pub fn walk_to_seed(nearest_higher: &[Option<usize>], is_seed: &[bool], start: usize) -> usize {
    let mut current = start;
    let mut steps = 0usize;
    while !is_seed[current] {
        match nearest_higher[current] {
            Some(next) => current = next,
            None => break,
        }
        steps += 1;
        assert!(steps <= nearest_higher.len(), "nearest-higher links form a cycle");
    }
    current
}
