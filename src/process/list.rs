//! A list menu as a process.

use alloc::boxed::Box;
use core::marker::PhantomData;

use super::{Process, ProcessHandle, Resume};
use crate::board::Board;
use crate::menu::{MenuController, MenuModel, MenuView, PromptSource};

/// Builds the process that follows a commit of the given index.
pub type Successor<B> = fn(u8, &mut B) -> ProcessHandle<B>;

/// Model, view and controller over one prompt list.
///
/// With a successor, a commit descends into whatever it builds. Without
/// one the list is terminal and a commit returns to the parent level.
pub struct ListProcess<B: Board, P: ?Sized + 'static> {
    model: MenuModel<'static, P>,
    view: MenuView,
    controller: MenuController,
    successor: Option<Successor<B>>,
    _board: PhantomData<fn(&mut B)>,
}

impl<B, P> ListProcess<B, P>
where
    B: Board + 'static,
    P: PromptSource + ?Sized + 'static,
{
    /// Set up the menu and draw it.
    pub fn new(
        board: &mut B,
        title: &'static str,
        prompts: &'static P,
        default_choice: u8,
        successor: Option<Successor<B>>,
    ) -> Self {
        let model = MenuModel::new(title, prompts, default_choice);
        let mut view = MenuView::new();
        view.draw(&model, board.display());
        let controller = MenuController::new(board, &model);
        Self {
            model,
            view,
            controller,
            successor,
            _board: PhantomData,
        }
    }

    /// [`ListProcess::new`], boxed into a handle.
    pub fn build(
        board: &mut B,
        title: &'static str,
        prompts: &'static P,
        default_choice: u8,
        successor: Option<Successor<B>>,
    ) -> ProcessHandle<B> {
        ProcessHandle::new(Self::new(board, title, prompts, default_choice, successor))
    }

    pub fn model(&self) -> &MenuModel<'static, P> {
        &self.model
    }
}

impl<B, P> Process<B> for ListProcess<B, P>
where
    B: Board + 'static,
    P: PromptSource + ?Sized + 'static,
{
    fn tick(&mut self, board: &mut B) -> bool {
        self.controller.tick(&mut self.model, &mut self.view, board)
    }

    fn draw(&mut self, board: &mut B) {
        self.view.draw(&self.model, board.display());
    }

    fn choice(&self) -> u8 {
        self.model.choice()
    }

    fn next_process(&mut self, choice: u8, board: &mut B) -> ProcessHandle<B> {
        match self.successor {
            Some(build) => build(choice, board),
            None => ProcessHandle::empty(),
        }
    }

    fn resume(&self) -> Option<Resume<B>> {
        let title = self.model.title();
        let prompts = self.model.prompts();
        let choice = self.model.choice();
        let successor = self.successor;
        Some(Box::new(move |board: &mut B| {
            Self::build(board, title, prompts, choice, successor)
        }))
    }
}
