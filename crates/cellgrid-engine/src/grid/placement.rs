use super::GridDims;

/// Maps an instance index to its `(col, row)` cell, row-major from the
/// bottom-left.
///
/// Must stay in lockstep with the vertex stage in `render/shaders/grid.wgsl`,
/// which computes `vec2f(i % grid.x, floor(i / grid.x))`.
#[inline]
pub fn cell_of_instance(dims: GridDims, instance: u32) -> (u32, u32) {
    debug_assert!(dims.is_valid());
    (instance % dims.cols, instance / dims.cols)
}

/// Clip-space offset of a cell's origin relative to cell `(0, 0)`.
///
/// Each cell spans `2 / cols` × `2 / rows` of the clip-space square, so the
/// offset is `cell / dims * 2`.
#[inline]
pub fn cell_offset(dims: GridDims, cell: (u32, u32)) -> (f32, f32) {
    debug_assert!(dims.is_valid());
    (
        cell.0 as f32 / dims.cols as f32 * 2.0,
        cell.1 as f32 / dims.rows as f32 * 2.0,
    )
}

/// Final clip-space position for one vertex of one instance.
///
/// `pos` is a base quad vertex in `[-0.8, 0.8]²`. The base quad is rescaled
/// into the bottom-left cell (`(pos + 1) / dims - 1`) and then translated by
/// the cell offset. Distinct instances land in distinct, non-overlapping
/// cells covering the full clip-space square.
#[inline]
pub fn grid_position(dims: GridDims, pos: (f32, f32), instance: u32) -> (f32, f32) {
    let offset = cell_offset(dims, cell_of_instance(dims, instance));
    (
        (pos.0 + 1.0) / dims.cols as f32 - 1.0 + offset.0,
        (pos.1 + 1.0) / dims.rows as f32 - 1.0 + offset.1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const G32: GridDims = GridDims::square(32);

    // ── cell_of_instance ──────────────────────────────────────────────────

    #[test]
    fn instance_zero_is_origin_cell() {
        assert_eq!(cell_of_instance(G32, 0), (0, 0));
    }

    #[test]
    fn instance_33_wraps_to_second_row() {
        assert_eq!(cell_of_instance(G32, 33), (1, 1));
    }

    #[test]
    fn last_instance_is_top_right_cell() {
        assert_eq!(cell_of_instance(G32, 32 * 32 - 1), (31, 31));
    }

    #[test]
    fn row_major_ordering() {
        let g = GridDims::new(3, 2);
        let cells: Vec<_> = (0..g.instances()).map(|i| cell_of_instance(g, i)).collect();
        assert_eq!(
            cells,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn distinct_instances_get_distinct_cells() {
        let g = GridDims::new(4, 3);
        let mut seen = std::collections::HashSet::new();
        for i in 0..g.instances() {
            assert!(seen.insert(cell_of_instance(g, i)));
        }
    }

    // ── cell_offset ───────────────────────────────────────────────────────

    #[test]
    fn origin_cell_has_zero_offset() {
        assert_eq!(cell_offset(G32, (0, 0)), (0.0, 0.0));
    }

    #[test]
    fn offset_scales_with_cell_index() {
        let (dx, dy) = cell_offset(G32, (16, 8));
        assert_eq!(dx, 1.0);
        assert_eq!(dy, 0.5);
    }

    #[test]
    fn top_right_cell_reaches_opposite_corner() {
        // Offset of the last cell is 2 - 2/n on each axis, so the cell's
        // far edge lands exactly on clip-space +1.
        let (dx, dy) = cell_offset(G32, (31, 31));
        assert!((dx - (2.0 - 2.0 / 32.0)).abs() < 1e-6);
        assert!((dy - (2.0 - 2.0 / 32.0)).abs() < 1e-6);
    }

    // ── grid_position ─────────────────────────────────────────────────────

    #[test]
    fn unit_grid_is_identity() {
        // A 1×1 grid reduces the transform to (pos + 1) / 1 - 1 + 0 = pos,
        // which is the single-quad program.
        let g = GridDims::square(1);
        assert_eq!(grid_position(g, (-0.8, -0.8), 0), (-0.8, -0.8));
        assert_eq!(grid_position(g, (0.8, 0.8), 0), (0.8, 0.8));
    }

    #[test]
    fn instance_zero_fills_bottom_left_cell() {
        let (x, y) = grid_position(G32, (-0.8, -0.8), 0);
        // Bottom-left cell spans [-1, -1 + 2/32); the quad sits inside it.
        assert!(x > -1.0 && x < -1.0 + 2.0 / 32.0);
        assert!(y > -1.0 && y < -1.0 + 2.0 / 32.0);
    }

    #[test]
    fn instances_stay_inside_their_cells() {
        let g = GridDims::new(8, 8);
        let cell_w = 2.0 / 8.0;
        for i in 0..g.instances() {
            let (col, row) = cell_of_instance(g, i);
            let min_x = -1.0 + col as f32 * cell_w;
            let min_y = -1.0 + row as f32 * cell_w;
            for corner in [(-0.8, -0.8), (0.8, -0.8), (0.8, 0.8), (-0.8, 0.8)] {
                let (x, y) = grid_position(g, corner, i);
                assert!(x >= min_x && x <= min_x + cell_w, "x out of cell: {x}");
                assert!(y >= min_y && y <= min_y + cell_w, "y out of cell: {y}");
            }
        }
    }
}
