//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::AppError;
use crate::model::ApiClient;
use crate::screen::{Command, ScreenInput};

use super::AppController;

fn screen_input(key: &KeyEvent) -> Option<ScreenInput> {
    let input = match key.code {
        KeyCode::Char(c) => ScreenInput::Char(c),
        KeyCode::Backspace => ScreenInput::Backspace,
        KeyCode::Enter => ScreenInput::Enter,
        KeyCode::Esc => ScreenInput::Esc,
        KeyCode::Up => ScreenInput::Up,
        KeyCode::Down => ScreenInput::Down,
        KeyCode::Left => ScreenInput::Left,
        KeyCode::Right => ScreenInput::Right,
        _ => return None,
    };
    Some(input)
}

impl<A: ApiClient> AppController<A> {
    /// Handle one key press to completion, including any API round trip.
    ///
    /// Only programmer errors are returned; everything else becomes a notification.
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<(), AppError> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // An open notification blocks all other interactions
        if self.ui.notification.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.dismiss_notification();
            }
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => self.execute(Command::Quit).await,
                KeyCode::Char('t') => self.execute(Command::ToggleTheme).await,
                _ => Ok(()),
            };
        }

        let Some(input) = screen_input(&key) else {
            return Ok(());
        };

        let command = match self.screens.active_screen_mut().handle_input(input) {
            Ok(command) => command,
            Err(e) => return self.report(e),
        };

        match command {
            Some(command) => self.execute(command).await,
            None => Ok(()),
        }
    }
}
