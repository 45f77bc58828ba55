use std::io::BufRead;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush};

/// What a key press did to the line being edited.
#[derive(Debug, PartialEq, Eq)]
pub enum Edit {
    Continue,
    Submit,
    Cancel,
    Interrupt,
}

/// Single-line editor state. `cursor` is a char index into `input`.
#[derive(Debug, Default)]
pub struct LineEditor {
    input: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    pub fn new(initial: &str) -> Self {
        let input: Vec<char> = initial.chars().collect();
        let cursor = input.len();
        Self { input, cursor }
    }

    pub fn text(&self) -> String {
        self.input.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn apply(&mut self, key: KeyEvent) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Edit::Interrupt,
            KeyCode::Char('q') if ctrl => return Edit::Cancel,
            KeyCode::Esc => return Edit::Cancel,
            KeyCode::Enter => return Edit::Submit,
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                self.cursor = 0;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.input.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.input.len() => {
                self.input.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.input.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input.len(),
            KeyCode::Char(c) if !ctrl => {
                self.input.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Edit::Continue
    }
}

/// Result of prompting for a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Esc or Ctrl+Q: abandon this field.
    Cancelled,
    /// Ctrl+C: leave the program.
    Interrupted,
    /// Stdin reached EOF or could not be read.
    Closed,
}

/// Read a line in raw mode, falling back to plain line reads.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Input {
    let mut editor = LineEditor::new(initial_value);

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            log::debug!("raw mode unavailable: {e}");
            print!("{prompt}: ");
            flush();
            return read_cooked(std::io::stdin().lock());
        }
    };

    redraw(prompt, &editor, 0);
    let mut last_len = editor.input.len();

    let outcome = loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(e) => {
                log::debug!("terminal read failed: {e}");
                break Input::Closed;
            }
        };

        match editor.apply(key) {
            Edit::Continue => {
                redraw(prompt, &editor, last_len);
                last_len = editor.input.len();
            }
            Edit::Submit => break Input::Line(editor.text()),
            Edit::Cancel => break Input::Cancelled,
            Edit::Interrupt => break Input::Interrupted,
        }
    };

    drop(guard);
    println!();
    outcome
}

fn redraw(prompt: &str, editor: &LineEditor, last_len: usize) {
    print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
    print!("\r{}: {}", prompt, editor.text());
    print!("\x1b[{}G", prompt.chars().count() + 3 + editor.cursor);
    flush();
}

/// Line read for terminals that refuse raw mode, or no terminal at all.
pub fn read_cooked<R: BufRead>(mut reader: R) -> Input {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Input::Closed,
        Ok(_) => Input::Line(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(e) => {
            log::debug!("stdin read failed: {e}");
            Input::Closed
        }
    }
}
