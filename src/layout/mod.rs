//! Geometry of a layout demand.
//!
//! The usable area of the output is cut into up to three zones:
//! - the primary zone, carved from the edge given by `primary_position`,
//! - the secondary zone, carved perpendicular to it from what is left,
//! - the remainder, which is whatever area is left after that.
//!
//! Each zone is then tiled with its own sub-layout. Nothing is kept between demands; every
//! demand is computed from scratch from the resolved [`Configuration`].

use stacktile_config::{ConfigStore, Configuration, Position};

pub mod sublayout;
pub mod zone;


/// Window geometry in output-local coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns this rectangle shrunk by `padding` on every side.
    pub fn shrink(self, padding: u32) -> Self {
        let twice = padding.saturating_mul(2);
        Self {
            x: self.x.saturating_add(padding),
            y: self.y.saturating_add(padding),
            width: self.width.saturating_sub(twice),
            height: self.height.saturating_sub(twice),
        }
    }

    /// Whether the two rectangles share any area. Empty rectangles never overlap.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        if self.area() == 0 || other.area() == 0 {
            return false;
        }

        let (x1, y1) = (u64::from(self.x), u64::from(self.y));
        let (x2, y2) = (u64::from(other.x), u64::from(other.y));
        x1 < x2 + u64::from(other.width)
            && x2 < x1 + u64::from(self.width)
            && y1 < y2 + u64::from(other.height)
            && y2 < y1 + u64::from(self.height)
    }
}

/// Parameters of a layout demand sent by the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDemand {
    pub view_count: u32,
    pub width: u32,
    pub height: u32,
    pub tags: u32,
}

/// Receiver of the computed geometry.
///
/// A demand is answered with one [`push_rectangle`](Self::push_rectangle) per window followed
/// by exactly one [`commit`](Self::commit).
pub trait LayoutSink {
    fn push_rectangle(&mut self, rect: Rectangle);
    fn commit(&mut self, layout_name: &str);
}

/// Resolves the configuration for the demanded tags and answers the demand.
pub fn handle_demand(configs: &mut ConfigStore, demand: LayoutDemand, sink: &mut impl LayoutSink) {
    let config = configs.resolve(demand.tags);
    let rects = generate(config, demand.view_count, demand.width, demand.height);
    debug_assert_eq!(rects.len(), demand.view_count as usize);

    for rect in rects {
        sink.push_rectangle(rect);
    }
    sink.commit(&config.layout_name());
}

/// Computes one rectangle per window for an output of the given size.
pub fn generate(config: &Configuration, view_count: u32, width: u32, height: u32) -> Vec<Rectangle> {
    let padding = config.inner_padding;
    let mut rects = Vec::new();
    let mut area = Rectangle::new(0, 0, width, height).shrink(config.outer_padding);

    if config.all_primary || config.primary_count >= view_count {
        sublayout::tile(area, view_count, padding, config.primary_sublayout, &mut rects);
        return rects;
    }

    if config.primary_count > 0 {
        let (zone, rest) = zone::split_off(
            area,
            config.primary_ratio,
            config.primary_position,
            padding,
        );
        sublayout::tile(
            zone,
            config.primary_count,
            padding,
            config.primary_sublayout,
            &mut rects,
        );
        area = rest;
    }

    let remaining = view_count - config.primary_count;
    if config.secondary_count >= remaining {
        sublayout::tile(area, remaining, padding, config.secondary_sublayout, &mut rects);
        return rects;
    }

    if config.secondary_count > 0 {
        // Keep the secondary zone perpendicular to the primary one.
        let position = if config.primary_position.is_horizontal() {
            Position::Top
        } else {
            Position::Left
        };

        let (zone, rest) = zone::split_off(area, config.secondary_ratio, position, padding);
        sublayout::tile(
            zone,
            config.secondary_count,
            padding,
            config.secondary_sublayout,
            &mut rects,
        );
        area = rest;
    }

    let remainder = remaining - config.secondary_count;
    sublayout::tile(area, remainder, padding, config.remainder_sublayout, &mut rects);

    rects
}
