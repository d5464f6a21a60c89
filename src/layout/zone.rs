use stacktile_config::{Position, Ratio};

use super::Rectangle;

/// Carves a zone from the `position` edge of `area`.
///
/// The zone takes `ratio` of the relevant axis minus half the padding. Returns the zone and the
/// rest of `area`, which loses the zone and the full padding.
pub fn split_off(
    area: Rectangle,
    ratio: Ratio,
    position: Position,
    padding: u32,
) -> (Rectangle, Rectangle) {
    let length = if position.is_horizontal() {
        area.width
    } else {
        area.height
    };

    let size = ((f64::from(length) * ratio.get()) as u32).saturating_sub(padding / 2);
    let rest = length.saturating_sub(size.saturating_add(padding));

    match position {
        Position::Top => (
            Rectangle {
                height: size,
                ..area
            },
            Rectangle {
                y: area.y.saturating_add(length - rest),
                height: rest,
                ..area
            },
        ),
        Position::Bottom => (
            Rectangle {
                y: area.y.saturating_add(length - size),
                height: size,
                ..area
            },
            Rectangle {
                height: rest,
                ..area
            },
        ),
        Position::Left => (
            Rectangle {
                width: size,
                ..area
            },
            Rectangle {
                x: area.x.saturating_add(length - rest),
                width: rest,
                ..area
            },
        ),
        Position::Right => (
            Rectangle {
                x: area.x.saturating_add(length - size),
                width: size,
                ..area
            },
            Rectangle {
                width: rest,
                ..area
            },
        ),
    }
}
