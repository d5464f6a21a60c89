//! Tiling of the windows inside a single zone.

use stacktile_config::Sublayout;

use super::Rectangle;

/// Fraction of the zone covered by each window of a [`Sublayout::Stack`].
const STACK_SIZE: f64 = 0.95;

/// Appends `count` rectangles tiling `area` with `sublayout` to `out`.
///
/// A single window always gets the whole area.
pub fn tile(
    area: Rectangle,
    count: u32,
    padding: u32,
    sublayout: Sublayout,
    out: &mut Vec<Rectangle>,
) {
    match count {
        0 => (),
        1 => out.push(area),
        _ => match sublayout {
            Sublayout::Rows => rows(area, count, padding, out),
            Sublayout::Columns => columns(area, count, padding, out),
            Sublayout::Stack => stack(area, count, out),
            Sublayout::Grid => grid(area, count, padding, out),
            Sublayout::Full => out.extend((0..count).map(|_| area)),
        },
    }
}

/// Size of one of `count` segments of `length`, separated by `padding`.
fn segment(length: u32, count: u32, padding: u32) -> u32 {
    let gaps = (count - 1).saturating_mul(padding);
    length.saturating_sub(gaps) / count
}

fn offset(start: u32, index: u32, step: u32) -> u32 {
    start.saturating_add(index.saturating_mul(step))
}

fn rows(area: Rectangle, count: u32, padding: u32, out: &mut Vec<Rectangle>) {
    let height = segment(area.height, count, padding);
    let step = height.saturating_add(padding);

    out.extend((0..count).map(|i| Rectangle {
        y: offset(area.y, i, step),
        height,
        ..area
    }));
}

fn columns(area: Rectangle, count: u32, padding: u32, out: &mut Vec<Rectangle>) {
    let width = segment(area.width, count, padding);
    let step = width.saturating_add(padding);

    out.extend((0..count).map(|i| Rectangle {
        x: offset(area.x, i, step),
        width,
        ..area
    }));
}

fn stack(area: Rectangle, count: u32, out: &mut Vec<Rectangle>) {
    let width = (f64::from(area.width) * STACK_SIZE) as u32;
    let height = (f64::from(area.height) * STACK_SIZE) as u32;
    let x_step = ((f64::from(area.width) * (1. - STACK_SIZE)) as u32) / (count - 1);
    let y_step = ((f64::from(area.height) * (1. - STACK_SIZE)) as u32) / (count - 1);

    out.extend((0..count).map(|i| Rectangle {
        x: offset(area.x, i, x_step),
        y: offset(area.y, i, y_step),
        width,
        height,
    }));
}

/// Returns the `(rows, columns)` of the grid holding `count` windows.
pub fn grid_size(count: u32) -> (u32, u32) {
    let rows = (f64::from(count).sqrt() as u32).max(1);
    (rows, count.div_ceil(rows))
}

fn grid(area: Rectangle, count: u32, padding: u32, out: &mut Vec<Rectangle>) {
    let (rows, columns) = grid_size(count);
    let width = segment(area.width, columns, padding);
    let height = segment(area.height, rows, padding);
    let x_step = width.saturating_add(padding);
    let y_step = height.saturating_add(padding);

    // The last row is left partially empty rather than stretched.
    out.extend((0..count).map(|i| Rectangle {
        x: offset(area.x, i % columns, x_step),
        y: offset(area.y, i / columns, y_step),
        width,
        height,
    }));
}
