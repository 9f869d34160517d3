/// One texture slot of the overlay. Each slot is backed by exactly one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// Shown before any input has been seen.
    Begin,
    Idle,
    Mouse,
    MouseClick,
    MouseDown,
    MouseDownClick,
    MouseLeft,
    MouseLeftClick,
    MouseRight,
    MouseRightClick,
    MouseUp,
    MouseUpClick,
    Keyboard1,
    Keyboard2,
    Keyboard3,
}

/// Number of keyboard paw frames.
pub const KEYBOARD_VARIATIONS: usize = 3;

impl Sprite {
    pub const COUNT: usize = 15;

    /// Every slot, in load order.
    pub const ALL: [Sprite; Self::COUNT] = [
        Sprite::Begin,
        Sprite::Idle,
        Sprite::Mouse,
        Sprite::MouseClick,
        Sprite::MouseDown,
        Sprite::MouseDownClick,
        Sprite::MouseLeft,
        Sprite::MouseLeftClick,
        Sprite::MouseRight,
        Sprite::MouseRightClick,
        Sprite::MouseUp,
        Sprite::MouseUpClick,
        Sprite::Keyboard1,
        Sprite::Keyboard2,
        Sprite::Keyboard3,
    ];

    /// Paw overlays, indexed by keyboard variation.
    pub const KEYBOARD: [Sprite; KEYBOARD_VARIATIONS] =
        [Sprite::Keyboard1, Sprite::Keyboard2, Sprite::Keyboard3];

    /// Asset file name, relative to the asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Sprite::Begin => "begin.png",
            Sprite::Idle => "idle.png",
            Sprite::Mouse => "mouse.png",
            Sprite::MouseClick => "mouse_click.png",
            Sprite::MouseDown => "mouse_down.png",
            Sprite::MouseDownClick => "mouse_down_click.png",
            Sprite::MouseLeft => "mouse_left.png",
            Sprite::MouseLeftClick => "mouse_left_click.png",
            Sprite::MouseRight => "mouse_right.png",
            Sprite::MouseRightClick => "mouse_right_click.png",
            Sprite::MouseUp => "mouse_up.png",
            Sprite::MouseUpClick => "mouse_up_click.png",
            Sprite::Keyboard1 => "overlay_keyboard.png",
            Sprite::Keyboard2 => "overlay_keyboard2.png",
            Sprite::Keyboard3 => "overlay_keyboard3.png",
        }
    }

    /// Position in [`Sprite::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_keyboard_overlay(self) -> bool {
        matches!(
            self,
            Sprite::Keyboard1 | Sprite::Keyboard2 | Sprite::Keyboard3
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_index_matches_load_order() {
        for (i, sprite) in Sprite::ALL.iter().enumerate() {
            assert_eq!(sprite.index(), i);
        }
    }

    #[test]
    fn test_file_names_unique() {
        let names: HashSet<_> = Sprite::ALL.iter().map(|s| s.file_name()).collect();
        assert_eq!(names.len(), Sprite::COUNT);
    }

    #[test]
    fn test_keyboard_overlays() {
        assert!(Sprite::KEYBOARD.iter().all(|s| s.is_keyboard_overlay()));
        assert_eq!(
            Sprite::ALL.iter().filter(|s| s.is_keyboard_overlay()).count(),
            KEYBOARD_VARIATIONS
        );
    }
}
