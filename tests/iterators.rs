use ndgrid::{Axis, Cursor, FlatCursor, Layout};

#[test]
fn default_order_is_row_major() {
    let l = Layout::from_shape(&[2, 3]);
    let positions: Vec<usize> = Cursor::new(&l).collect();
    assert_eq!(positions, (0..6).collect::<Vec<usize>>());
}

#[test]
fn major_axis_is_outermost() {
    let l = Layout::from_shape(&[2, 3]);
    let positions: Vec<usize> = Cursor::with_major(&l, Axis(1)).collect();
    assert_eq!(positions, [0, 3, 1, 4, 2, 5]);
}

#[test]
fn explicit_order_has_the_last_axis_innermost() {
    let l = Layout::from_shape(&[2, 2]);
    let positions: Vec<usize> = Cursor::with_order(&l, &[1, 0]).collect();
    assert_eq!(positions, [0, 2, 1, 3]);
    // the identity order is the default walk
    let positions: Vec<usize> = Cursor::with_order(&l, &[0, 1]).collect();
    assert_eq!(positions, [0, 1, 2, 3]);
}

#[test]
fn order_walk_matches_transpose_semantics() {
    let l = Layout::from_shape(&[4, 2, 3, 2]);
    let positions: Vec<usize> = Cursor::with_order(&l, &[2, 0, 1, 3]).collect();
    assert_eq!(&positions[..8], [0, 1, 6, 7, 12, 13, 18, 19]);
    assert_eq!(positions.len(), l.count());
}

#[test]
fn cursor_on_sliced_layouts_visits_parent_positions() {
    let parent = Layout::from_shape(&[3, 4]);
    let view = parent.slice(&ndgrid::iv![1..=2, ndgrid::Interval::new(0, -1, 2)]);
    assert_eq!(view.dims(), &[2, 2]);
    let positions: Vec<usize> = Cursor::new(&view).collect();
    assert_eq!(positions, [4, 6, 8, 10]);
}

#[test]
fn stepping_out_and_back_in() {
    let l = Layout::from_shape(&[2, 2]);
    let mut c = Cursor::new(&l);
    assert!(c.in_range());
    assert_eq!(c.pos(), 0);

    // step backwards off the front, then back in at the start
    c.advance(-1);
    assert!(!c.in_range());
    c.advance(1);
    assert!(c.in_range());
    assert_eq!(c.pos(), 0);

    // walk off the back, then re-enter at the last element
    c.advance(4);
    assert!(!c.in_range());
    c.advance(-1);
    assert!(c.in_range());
    assert_eq!(c.pos(), 3);
    assert_eq!(c.subs(), [1, 1]);
}

#[test]
fn advance_by_k_is_k_unit_steps() {
    let l = Layout::from_shape(&[2, 3]);
    let mut c = Cursor::new(&l);
    c.advance(4);
    assert_eq!(c.pos(), 4);
    assert_eq!(c.subs(), [1, 1]);
    c.advance(-3);
    assert_eq!(c.pos(), 1);
}

#[test]
fn reset_returns_to_the_start() {
    let l = Layout::from_shape(&[2, 3]);
    let mut c = Cursor::new(&l);
    c.advance(5);
    assert_eq!(c.pos(), 5);
    c.reset();
    assert_eq!(c.pos(), 0);
}

#[test]
fn custom_start_and_bounds() {
    let l = Layout::from_shape(&[4]);
    // walk only the middle band (subscripts 1 and 2)
    let positions: Vec<usize> = Cursor::new(&l)
        .starting_at(&[1])
        .bounded(Axis(0), 0, 3)
        .collect();
    assert_eq!(positions, [1, 2]);
}

#[test]
fn empty_layout_yields_nothing() {
    let l = Layout::from_shape(&[2, 0, 3]);
    let mut c = Cursor::new(&l);
    assert!(!c.in_range());
    assert_eq!(c.next(), None);
}

#[test]
fn flat_cursor_matches_the_general_cursor() {
    let l = Layout::from_shape(&[3, 4]);
    let general: Vec<usize> = Cursor::new(&l).collect();
    let fast: Vec<usize> = FlatCursor::new(&l).collect();
    assert_eq!(general, fast);
}

#[test]
fn flat_cursor_walks_a_lane_by_stride() {
    let l = Layout::from_shape(&[3, 2]);
    let rows: Vec<usize> = FlatCursor::with_major(&l, Axis(0)).collect();
    assert_eq!(rows, [0, 2, 4]);
    let cols: Vec<usize> = FlatCursor::with_major(&l, Axis(1)).collect();
    assert_eq!(cols, [0, 1]);
}

#[test]
fn flat_cursor_saturates_one_past_the_ends() {
    let l = Layout::from_shape(&[3]);
    let mut c = FlatCursor::new(&l);
    c.advance(10);
    assert!(!c.in_range());
    c.advance(-1);
    assert!(c.in_range());
    assert_eq!(c.pos(), 2);
    c.reset();
    assert_eq!(c.pos(), 0);
}
