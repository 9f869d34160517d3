/// Pointer movement below this many pixels on the dominant axis is jitter.
pub const MOTION_THRESHOLD: i64 = 2;

/// Last detected pointer direction, or its absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Orientation {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    /// No input seen yet.
    #[default]
    None = 4,
    /// Input seen, but no qualifying pointer movement yet.
    Default = 5,
}

impl Orientation {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Orientation::as_u8`]. Out-of-range values map to `None`.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Up,
            1 => Self::Down,
            2 => Self::Left,
            3 => Self::Right,
            5 => Self::Default,
            _ => Self::None,
        }
    }

    /// Direction implied by a pointer delta, if it clears the threshold.
    ///
    /// The horizontal axis wins only when strictly larger, so ties fall to the
    /// vertical branch. Screen coordinates: positive `dy` is down.
    pub fn from_motion(dx: i64, dy: i64) -> Option<Self> {
        if dx.abs() > dy.abs() {
            if dx > MOTION_THRESHOLD {
                Some(Self::Right)
            } else if dx < -MOTION_THRESHOLD {
                Some(Self::Left)
            } else {
                None
            }
        } else if dy > MOTION_THRESHOLD {
            Some(Self::Down)
        } else if dy < -MOTION_THRESHOLD {
            Some(Self::Up)
        } else {
            None
        }
    }

    /// Up, Down, Left or Right.
    pub fn is_directional(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }
}
