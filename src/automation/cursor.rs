// Cursor save/restore around synthetic clicks
use crate::desktop::{DesktopResult, Point, Pointer};
use std::ops::{Deref, DerefMut};

/// Remembers the cursor position on creation and puts the cursor back when
/// dropped, whether or not the work in between succeeded.
pub struct CursorGuard<'a, P: Pointer + ?Sized> {
    pointer: &'a mut P,
    saved: Point,
}

impl<'a, P: Pointer + ?Sized> CursorGuard<'a, P> {
    pub fn new(pointer: &'a mut P) -> DesktopResult<Self> {
        let saved = pointer.cursor_position()?;
        Ok(Self { pointer, saved })
    }

    pub fn saved(&self) -> Point {
        self.saved
    }
}

impl<P: Pointer + ?Sized> Deref for CursorGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.pointer
    }
}

impl<P: Pointer + ?Sized> DerefMut for CursorGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.pointer
    }
}

impl<P: Pointer + ?Sized> Drop for CursorGuard<'_, P> {
    fn drop(&mut self) {
        if let Err(e) = self.pointer.set_cursor_position(self.saved) {
            log::warn!("Failed to restore cursor to {}: {}", self.saved, e);
        }
    }
}

/// Move to `at`, click, and put the cursor back where the operator left it
pub fn click_preserving_cursor<P: Pointer + ?Sized>(pointer: &mut P, at: Point) -> DesktopResult<()> {
    let mut guard = CursorGuard::new(pointer)?;
    guard.set_cursor_position(at)?;
    guard.synthesize_click()?;
    log::info!("Clicked at {}", at);
    Ok(())
}
