use super::*;

#[test]
fn maps_cells_from_the_padding_corner() {
    let grid = GridMap::new(42.0, 18.0);
    assert_eq!(grid.x(0), 18.0);
    assert_eq!(grid.y(2), 102.0);
    assert_eq!(grid.xf(0.5), 39.0);
    assert_eq!(grid.yf(-1.0), -24.0);
}

#[test]
fn distinct_pads_apply_per_axis() {
    let grid = GridMap::with_pads(56.0, 67.2, 78.4);
    assert_eq!(grid.x(1), 123.2);
    assert_eq!(grid.y(1), 134.4);
}

#[test]
fn origin_shift_handles_negative_columns() {
    let grid = GridMap::new(56.0, 56.0).with_origin(-5, -1);
    assert_eq!(grid.x(-5), 56.0);
    assert_eq!(grid.x(0), 336.0);
    assert_eq!(grid.y(-1), 56.0);
    assert_eq!(grid.y(4), 336.0);
}

#[test]
fn center_and_rect_agree() {
    let grid = GridMap::new(40.0, 10.0);
    let c = grid.center(2, 1);
    assert_eq!((c.x, c.y), (110.0, 70.0));
    let r = grid.cell_rect(2, 1);
    assert_eq!((r.x0, r.y0, r.x1, r.y1), (90.0, 50.0, 130.0, 90.0));
    assert_eq!(r.center(), c);
}
