//! Collision detection and response on the integer grid
//!
//! The ball advances exactly one column per tick and paddle faces are single
//! columns, so every check here is an exact equality on `x` plus a strict
//! range test on `y`. A faster ball would need interval overlap tests instead.

use super::state::{Paddle, PaddleMotion, Side, Wall};

/// Strictly inside the paddle's vertical span; the end rows do not count
#[inline]
fn within_face(y: i32, paddle: &Paddle) -> bool {
    paddle.y < y && y < paddle.y + paddle.height
}

/// Ball sits on the left paddle's contact column, level with its face
pub fn hits_left_paddle(x: i32, y: i32, paddle: &Paddle) -> bool {
    x == paddle.x + paddle.width && within_face(y, paddle)
}

/// Ball sits on the right paddle's contact column, level with its face
pub fn hits_right_paddle(x: i32, y: i32, paddle: &Paddle) -> bool {
    x == paddle.x - paddle.width && within_face(y, paddle)
}

/// Computes whether the ball has left the playfield horizontally.
/// * If so, returns the [`Side`] it left through.
/// * If not, returns [`None`].
pub fn exit_side(x: i32, right_exit: i32) -> Option<Side> {
    if x <= 0 {
        Some(Side::Left)
    } else if x >= right_exit {
        Some(Side::Right)
    } else {
        None
    }
}

/// Wall the ball is exactly touching, if any
pub fn wall_contact(y: i32, bottom: i32) -> Option<Wall> {
    if y == 0 {
        Some(Wall::Top)
    } else if y == bottom {
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Nudge the vertical step by one in the direction given by the paddle's
/// last motion, never past ±1
pub fn apply_english(y_offset: i32, motion: PaddleMotion) -> i32 {
    match motion {
        PaddleMotion::Up if y_offset < 1 => y_offset + 1,
        PaddleMotion::Down if y_offset > -1 => y_offset - 1,
        _ => y_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Playfield;

    fn paddle(x: i32, y: i32) -> Paddle {
        Paddle::new(5, 30, x, y, Playfield::new(160, 128))
    }

    #[test]
    fn test_left_contact_column() {
        let left = paddle(1, 0);
        assert!(hits_left_paddle(6, 15, &left));
        assert!(!hits_left_paddle(5, 15, &left));
        assert!(!hits_left_paddle(7, 15, &left));
    }

    #[test]
    fn test_right_contact_column() {
        let right = paddle(154, 92);
        assert!(hits_right_paddle(149, 100, &right));
        assert!(!hits_right_paddle(150, 100, &right));
    }

    #[test]
    fn test_face_is_exclusive_at_both_ends() {
        let left = paddle(1, 30);
        assert!(!hits_left_paddle(6, 30, &left));
        assert!(hits_left_paddle(6, 31, &left));
        assert!(hits_left_paddle(6, 59, &left));
        assert!(!hits_left_paddle(6, 60, &left));
    }

    #[test]
    fn test_exit_side() {
        assert_eq!(exit_side(0, 157), Some(Side::Left));
        assert_eq!(exit_side(-1, 157), Some(Side::Left));
        assert_eq!(exit_side(1, 157), None);
        assert_eq!(exit_side(156, 157), None);
        assert_eq!(exit_side(157, 157), Some(Side::Right));
    }

    #[test]
    fn test_wall_contact_is_exact() {
        assert_eq!(wall_contact(0, 120), Some(Wall::Top));
        assert_eq!(wall_contact(120, 120), Some(Wall::Bottom));
        assert_eq!(wall_contact(1, 120), None);
        assert_eq!(wall_contact(119, 120), None);
    }

    #[test]
    fn test_english_is_capped() {
        assert_eq!(apply_english(-1, PaddleMotion::Up), 0);
        assert_eq!(apply_english(0, PaddleMotion::Up), 1);
        assert_eq!(apply_english(1, PaddleMotion::Up), 1);
        assert_eq!(apply_english(1, PaddleMotion::Down), 0);
        assert_eq!(apply_english(0, PaddleMotion::Down), -1);
        assert_eq!(apply_english(-1, PaddleMotion::Down), -1);
        for offset in -1..=1 {
            assert_eq!(apply_english(offset, PaddleMotion::Still), offset);
        }
    }
}
