use crate::core::data::screen_point::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerModifiers {
    /// Modifier-click: toggles dive mode instead of starting a drag.
    pub dive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down {
        position: ScreenPoint,
        modifiers: PointerModifiers,
    },
    Move {
        position: ScreenPoint,
    },
    Up {
        position: ScreenPoint,
    },
}

impl PointerEvent {
    #[must_use]
    pub fn position(&self) -> ScreenPoint {
        match *self {
            Self::Down { position, .. } | Self::Move { position } | Self::Up { position } => {
                position
            }
        }
    }
}
