//! Ship vs. pipe and ship vs. viewport checks
//!
//! Everything is axis-aligned: the ship's bounding box ignores its display
//! rotation.

use super::state::{PipePair, Ship, Viewport};

/// True when the ship and the pipe pair share any horizontal extent
pub fn overlaps_horizontally(ship: &Ship, pipe: &PipePair) -> bool {
    ship.right() > pipe.x && ship.x < pipe.right()
}

/// True when the ship's vertical extent reaches into either pipe
pub fn hits_pipe_vertically(ship: &Ship, pipe: &PipePair) -> bool {
    ship.y < pipe.top_height || ship.bottom() > pipe.bottom_y
}

/// Full ship/pipe collision test
pub fn ship_hits_pipe(ship: &Ship, pipe: &PipePair) -> bool {
    overlaps_horizontally(ship, pipe) && hits_pipe_vertically(ship, pipe)
}

/// True once the pipe's right edge is behind the ship's left edge
pub fn pipe_cleared(ship: &Ship, pipe: &PipePair) -> bool {
    pipe.right() < ship.x
}

/// True when the ship has left the viewport by more than `tolerance`
pub fn out_of_bounds(ship: &Ship, viewport: Viewport, tolerance: f32) -> bool {
    ship.y < -tolerance || ship.bottom() > viewport.height + tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn ship_at(y: f32) -> Ship {
        Ship::new(&Tuning::default(), y)
    }

    #[test]
    fn horizontal_overlap_edges_are_exclusive() {
        let ship = ship_at(200.0); // x 50..94
        assert!(!overlaps_horizontally(&ship, &PipePair::new(94.0, 26.0, 100.0, 140.0)));
        assert!(overlaps_horizontally(&ship, &PipePair::new(93.0, 26.0, 100.0, 140.0)));
        assert!(!overlaps_horizontally(&ship, &PipePair::new(24.0, 26.0, 100.0, 140.0)));
        assert!(overlaps_horizontally(&ship, &PipePair::new(25.0, 26.0, 100.0, 140.0)));
    }

    #[test]
    fn ship_inside_gap_is_safe() {
        let ship = ship_at(150.0); // 150..178 inside 100..240
        let pipe = PipePair::new(60.0, 26.0, 100.0, 140.0);
        assert!(!ship_hits_pipe(&ship, &pipe));
    }

    #[test]
    fn ship_above_gap_hits() {
        let ship = ship_at(40.0);
        let pipe = PipePair::new(60.0, 26.0, 100.0, 140.0);
        assert!(ship_hits_pipe(&ship, &pipe));
    }

    #[test]
    fn ship_below_gap_hits() {
        let ship = ship_at(220.0); // bottom 248 > 240
        let pipe = PipePair::new(60.0, 26.0, 100.0, 140.0);
        assert!(ship_hits_pipe(&ship, &pipe));
    }

    #[test]
    fn cleared_once_right_edge_behind_ship() {
        let ship = ship_at(100.0);
        assert!(!pipe_cleared(&ship, &PipePair::new(24.0, 26.0, 0.0, 140.0)));
        assert!(pipe_cleared(&ship, &PipePair::new(23.0, 26.0, 0.0, 140.0)));
    }

    #[test]
    fn bounds_have_tolerance_on_both_edges() {
        let vp = Viewport {
            width: 800.0,
            height: 600.0,
        };
        assert!(!out_of_bounds(&ship_at(-50.0), vp, 50.0));
        assert!(out_of_bounds(&ship_at(-50.5), vp, 50.0));
        // bottom = y + 28
        assert!(!out_of_bounds(&ship_at(622.0), vp, 50.0));
        assert!(out_of_bounds(&ship_at(622.5), vp, 50.0));
    }
}
