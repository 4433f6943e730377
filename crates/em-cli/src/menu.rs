//! The interactive menu loop.
//!
//! The controller is a small state machine: from [`MenuState::Idle`] one
//! numeric choice selects an action, which runs and returns to idle. Only
//! [`MenuState::Exiting`] ends the loop, either by choice or because input
//! ran out.

use std::io::{BufRead, Write};

use anyhow::Result;

use em_core::{Session, Teardown};

use crate::Config;
use crate::commands::{add, display, process};
use crate::input::{Console, InputError};

const MENU: &str = "\n===== Event Management System =====\n\
                    1. Add Event\n\
                    2. Display Events\n\
                    3. Process Event Queue\n\
                    4. Exit";

/// Controller states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Idle,
    AddingEvent,
    Displaying,
    ProcessingQueue,
    Exiting,
}

impl MenuState {
    /// Maps a menu selection to the state it enters.
    ///
    /// Anything other than `1`-`4` is not a valid choice.
    pub fn from_choice(line: &str) -> Option<Self> {
        match line.trim().parse::<u8>().ok()? {
            1 => Some(Self::AddingEvent),
            2 => Some(Self::Displaying),
            3 => Some(Self::ProcessingQueue),
            4 => Some(Self::Exiting),
            _ => None,
        }
    }
}

/// Drives a [`Session`] from interactive input.
pub struct Controller<R, W> {
    console: Console<R, W>,
    session: Session,
    config: Config,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            console: Console::new(input, output),
            session: Session::new(),
            config,
        }
    }

    /// Runs the menu until the user exits or input ends, then tears the
    /// session down.
    pub fn run(mut self) -> Result<Teardown> {
        let mut state = MenuState::Idle;
        while state != MenuState::Exiting {
            state = self.step(state)?;
        }

        writeln!(self.console.output(), "Exiting...")?;
        self.console.output().flush()?;
        Ok(self.session.close())
    }

    fn step(&mut self, state: MenuState) -> Result<MenuState> {
        tracing::debug!(?state, "menu state");
        let next = match state {
            MenuState::Idle => self.select()?,
            MenuState::AddingEvent => {
                match add::run(&mut self.console, &mut self.session, &self.config) {
                    Ok(_) => MenuState::Idle,
                    Err(err) if InputError::is_closed(&err) => {
                        tracing::debug!("input closed while adding event");
                        MenuState::Exiting
                    }
                    Err(err) => return Err(err),
                }
            }
            MenuState::Displaying => {
                display::run(
                    self.console.output(),
                    self.session.catalog(),
                    self.config.precision,
                )?;
                MenuState::Idle
            }
            MenuState::ProcessingQueue => {
                process::run(self.console.output(), &mut self.session)?;
                MenuState::Idle
            }
            MenuState::Exiting => MenuState::Exiting,
        };
        Ok(next)
    }

    fn select(&mut self) -> Result<MenuState> {
        writeln!(self.console.output(), "{MENU}")?;
        let line = match self.console.prompt_line("Enter your choice: ") {
            Ok(line) => line,
            Err(InputError::Closed) => {
                tracing::debug!("input closed at menu");
                return Ok(MenuState::Exiting);
            }
            Err(err) => return Err(err.into()),
        };

        if let Some(state) = MenuState::from_choice(&line) {
            Ok(state)
        } else {
            tracing::debug!(choice = %line, "invalid menu choice");
            writeln!(self.console.output(), "Invalid choice!")?;
            Ok(MenuState::Idle)
        }
    }
}
