//! The appliance's menu tree.
//!
//! ```text
//! Main ─┬─ <system> ── Read ROM / Read Save / Write Save / Cart Info / Back
//!       ├─ About
//!       └─ Reset ───── Soft reset / Back
//! ```
//!
//! Each level is built only when its parent commits, and rebuilt when a
//! child returns to it. Cartridge operations end in a notice: this
//! firmware carries the menu only.

use crate::board::Board;
use crate::menu::{inline_prompt, NulSeparated, PromptSource};
use crate::process::{ActionProcess, ListProcess, MessageProcess, ProcessHandle};
use crate::ui::DisplaySurface;

/// Cartridge systems listed ahead of the utility entries.
const SYSTEM_COUNT: u8 = 9;

static MAIN_MENU: [&str; 11] = [
    "Game Boy",
    "NES/Famicom",
    "Super Nintendo",
    "Nintendo 64",
    "Mega Drive",
    "Master System",
    "PC Engine",
    "WonderSwan",
    "Neo Geo Pocket",
    "About",
    "Reset",
];

const ABOUT: u8 = SYSTEM_COUNT;
const RESET: u8 = SYSTEM_COUNT + 1;

static CART_OPERATIONS: [[u8; 12]; 5] = [
    inline_prompt("Read ROM"),
    inline_prompt("Read Save"),
    inline_prompt("Write Save"),
    inline_prompt("Cart Info"),
    inline_prompt("Back"),
];

const BACK: u8 = 4;

static RESET_CONFIRM: NulSeparated<'static> = NulSeparated::new("Soft reset\0Back\0");

static ABOUT_TEXT: [&str; 3] = [
    "Cartridge reader menu",
    "Turn to move, press to select.",
    "Hold to see the long-press colour.",
];

static UNAVAILABLE_TEXT: [&str; 2] = [
    "No cartridge interface on this build.",
    "Press to return.",
];

/// Root of the tree, with `choice` preselected.
pub fn main_menu<B: Board + 'static>(board: &mut B, choice: u8) -> ProcessHandle<B> {
    ListProcess::build(board, "Main Menu", &MAIN_MENU[..], choice, Some(main_entry))
}

fn main_entry<B: Board + 'static>(choice: u8, board: &mut B) -> ProcessHandle<B> {
    match choice {
        c if c < SYSTEM_COUNT => {
            let title = MAIN_MENU[c as usize];
            ListProcess::build(board, title, &CART_OPERATIONS[..], 0, Some(cart_operation))
        }
        ABOUT => {
            let uptime_s = board.now_ms() / 1000;
            let about =
                MessageProcess::with_value(board, "About", &ABOUT_TEXT, "Up (s): ", uptime_s);
            ProcessHandle::new(about)
        }
        RESET => ListProcess::build(board, "Reset", &RESET_CONFIRM, 0, Some(reset_entry)),
        _ => ProcessHandle::empty(),
    }
}

fn cart_operation<B: Board + 'static>(choice: u8, board: &mut B) -> ProcessHandle<B> {
    if choice == BACK {
        return ProcessHandle::empty();
    }
    let title = CART_OPERATIONS[..].prompt(choice as usize).unwrap_or("");
    MessageProcess::build(board, title, &UNAVAILABLE_TEXT)
}

fn reset_entry<B: Board + 'static>(choice: u8, _board: &mut B) -> ProcessHandle<B> {
    match choice {
        0 => ActionProcess::build(soft_reset),
        _ => ProcessHandle::empty(),
    }
}

/// Blank the panel. The navigator then rebuilds the Reset menu.
fn soft_reset<B: Board>(board: &mut B) {
    #[cfg(feature = "defmt")]
    defmt::info!("menu: soft reset");
    let display = board.display();
    display.clear();
    display.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{Navigator, Step};
    use crate::testing::{self, click, turn, TestBoard};
    use crate::ui::DrawColor;

    fn select(board: &mut TestBoard, nav: &mut Navigator<TestBoard>, steps: u8) -> Step {
        for _ in 0..steps {
            turn(board, true, |b| nav.poll(b) != Step::Idle);
        }
        let mut step = Step::Idle;
        click(board, 100, |b| {
            step = nav.poll(b);
            step != Step::Idle
        });
        step
    }

    #[test]
    fn main_menu_spans_two_pages() {
        let mut board = testing::board();
        let _nav = Navigator::new(&mut board, main_menu);
        assert_eq!(board.display.printed().len(), 1 + 7);
        assert_eq!(board.display.printed()[7], "PC Engine");
    }

    #[test]
    fn system_entry_opens_operations() {
        let mut board = testing::board();
        let mut nav = Navigator::new(&mut board, main_menu);
        assert_eq!(select(&mut board, &mut nav, 2), Step::Advanced { choice: 2 });
        let printed = board.display.printed();
        let title = printed.iter().position(|&t| t == "Super Nintendo");
        assert!(title.is_some());
        assert!(printed.ends_with(&["Read ROM", "Read Save", "Write Save", "Cart Info", "Back"]));
    }

    #[test]
    fn operation_notice_returns_to_its_system() {
        let mut board = testing::board();
        let mut nav = Navigator::new(&mut board, main_menu);
        select(&mut board, &mut nav, 3);
        assert_eq!(select(&mut board, &mut nav, 1), Step::Advanced { choice: 1 });
        assert_eq!(nav.depth(), 2);
        assert!(board.display.printed().concat().contains("No cartridge interface"));

        board.display.reset();
        assert_eq!(select(&mut board, &mut nav, 0), Step::Popped);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.root_choice(), 3);
        assert_eq!(board.display.printed()[0], "Nintendo 64");
        // "Read Save" is still selected.
        assert_eq!(board.display.boxes().last(), Some(&(19, DrawColor::Normal)));

        // Back (from "Read Save", three detents on) returns to the main menu.
        assert_eq!(select(&mut board, &mut nav, BACK - 1), Step::Popped);
        assert_eq!(nav.depth(), 0);
        assert_eq!(board.display.printed().last(), Some(&"PC Engine"));
    }

    #[test]
    fn about_shows_uptime_in_seconds() {
        let mut board = testing::board();
        let mut nav = Navigator::new(&mut board, main_menu);
        board.clock.0.set(90_000);
        assert_eq!(select(&mut board, &mut nav, ABOUT), Step::Advanced { choice: ABOUT });
        let printed = board.display.printed();
        assert!(printed.contains(&"About"));
        assert!(printed.ends_with(&["Up (s): ", "90"]));
    }

    #[test]
    fn back_entry_pops() {
        let mut board = testing::board();
        let mut nav = Navigator::new(&mut board, main_menu);
        select(&mut board, &mut nav, 0);
        assert_eq!(select(&mut board, &mut nav, BACK), Step::Popped);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn reset_confirm_uses_separated_prompts() {
        let mut board = testing::board();
        let mut nav = Navigator::new(&mut board, main_menu);
        assert_eq!(select(&mut board, &mut nav, RESET), Step::Advanced { choice: RESET });
        assert!(board.display.printed().ends_with(&["Reset", "Soft reset", "Back"]));

        assert_eq!(select(&mut board, &mut nav, 0), Step::Advanced { choice: 0 });
        board.display.reset();
        assert_eq!(nav.poll(&mut board), Step::Popped);
        // The action blanks the panel, then the Reset menu comes back.
        assert_eq!(board.display.clears(), 2);
        assert_eq!(board.display.printed(), ["Reset", "Soft reset", "Back"]);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.root_choice(), RESET);
    }
}
