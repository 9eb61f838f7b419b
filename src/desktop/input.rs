// Synthetic mouse input backed by enigo
use super::error::{DesktopError, DesktopResult};
use super::types::{Point, Pointer};
use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};

pub struct EnigoPointer {
    enigo: Enigo,
}

impl EnigoPointer {
    pub fn new() -> DesktopResult<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|source| DesktopError::InputConnection { source })?;
        Ok(Self { enigo })
    }
}

impl Pointer for EnigoPointer {
    fn cursor_position(&mut self) -> DesktopResult<Point> {
        let (x, y) = self
            .enigo
            .location()
            .map_err(|source| DesktopError::InputFailed {
                action: "get cursor position",
                source,
            })?;
        Ok(Point::new(x, y))
    }

    fn set_cursor_position(&mut self, at: Point) -> DesktopResult<()> {
        self.enigo
            .move_mouse(at.x, at.y, Coordinate::Abs)
            .map_err(|source| DesktopError::InputFailed {
                action: "set cursor position",
                source,
            })
    }

    fn synthesize_click(&mut self) -> DesktopResult<()> {
        self.enigo
            .button(Button::Left, Direction::Press)
            .map_err(|source| DesktopError::InputFailed {
                action: "left button down",
                source,
            })?;
        self.enigo
            .button(Button::Left, Direction::Release)
            .map_err(|source| DesktopError::InputFailed {
                action: "left button up",
                source,
            })
    }
}
