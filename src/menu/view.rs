//! Paged list rendering with marker-only redraws.
//!
//! Layout (128×64, 8 px rows):
//! ```text
//! row 0      Title
//! rows 1..7  ▪ prompt      ← up to PAGE_SIZE prompts of the current page
//! ```
//! The selection marker is a small filled square left of the prompt.
//! Moving within a page erases the old marker and draws the new one;
//! only a page change repaints the whole screen. The panel bus is slow,
//! so the marker path is what normal scrolling should hit.

use super::model::MenuModel;
use super::prompts::PromptSource;
use crate::config::{
    FIRST_BASELINE, MARKER_SIZE, MARKER_X, MARKER_Y_OFFSET, PAGE_SIZE, PROMPT_X, ROW_HEIGHT,
};
use crate::ui::input_logic::{page_of, row_on_page};
use crate::ui::{DisplaySurface, DrawColor};

/// What an update cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Redraw {
    /// Selection unchanged; nothing drawn.
    None,
    /// Marker moved within the page.
    Marker,
    /// Page changed; whole screen repainted.
    Full,
}

/// Tracks which selection is currently on screen.
#[derive(Clone, Debug)]
pub struct MenuView {
    last_rendered: Option<u8>,
}

impl MenuView {
    /// A view with nothing on screen yet; the first `update` draws the
    /// whole page.
    pub fn new() -> Self {
        Self { last_rendered: None }
    }

    /// Selection index whose marker is on screen.
    pub fn last_rendered(&self) -> Option<u8> {
        self.last_rendered
    }

    /// Repaint the page holding the model's selection.
    pub fn draw<P, D>(&mut self, model: &MenuModel<'_, P>, surface: &mut D)
    where
        P: PromptSource + ?Sized,
        D: DisplaySurface,
    {
        surface.clear();
        surface.set_draw_color(DrawColor::Normal);

        surface.set_cursor(0, FIRST_BASELINE);
        surface.println(model.title());

        let selected = model.choice();
        let first = page_of(selected, PAGE_SIZE) as usize * PAGE_SIZE as usize;
        let on_page = (model.max_choices() as usize - first).min(PAGE_SIZE as usize);

        for index in first..first + on_page {
            let (_, y) = surface.cursor();
            surface.set_cursor(PROMPT_X, y);
            surface.println(model.prompt(index as u8));
        }

        draw_marker(surface, row_on_page(selected, PAGE_SIZE));
        surface.flush();

        self.last_rendered = Some(selected);
    }

    /// Bring the screen in line with the model's selection.
    pub fn update<P, D>(&mut self, model: &MenuModel<'_, P>, surface: &mut D) -> Redraw
    where
        P: PromptSource + ?Sized,
        D: DisplaySurface,
    {
        let Some(old) = self.last_rendered else {
            self.draw(model, surface);
            return Redraw::Full;
        };
        let new = model.choice();
        if new == old {
            return Redraw::None;
        }

        if page_of(old, PAGE_SIZE) != page_of(new, PAGE_SIZE) {
            self.draw(model, surface);
            return Redraw::Full;
        }

        surface.set_draw_color(DrawColor::Inverted);
        draw_marker(surface, row_on_page(old, PAGE_SIZE));
        surface.set_draw_color(DrawColor::Normal);
        draw_marker(surface, row_on_page(new, PAGE_SIZE));
        surface.flush();

        self.last_rendered = Some(new);
        Redraw::Marker
    }
}

impl Default for MenuView {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_marker<D: DisplaySurface>(surface: &mut D, row: u8) {
    let y = MARKER_Y_OFFSET + ROW_HEIGHT * row as i32;
    surface.draw_box(MARKER_X, y, MARKER_SIZE, MARKER_SIZE);
}
