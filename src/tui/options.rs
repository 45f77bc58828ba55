use crate::cli::prompts::large_length_message;
use crate::pass::{self, GenerateError, length};
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

use super::{
    Input, Status, enter_prompt, get_editable_input, print_help, print_main_menu, print_status,
};

/// A menu selection.
#[derive(Debug, PartialEq, Eq)]
pub enum Choice {
    Generate,
    EditLength,
    ToggleLetters,
    ToggleNumbers,
    ToggleSymbols,
    Help,
    Quit,
    Invalid,
}

impl Choice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "" => Choice::Generate,
            "1" => Choice::EditLength,
            "2" => Choice::ToggleLetters,
            "3" => Choice::ToggleNumbers,
            "4" => Choice::ToggleSymbols,
            "h" | "help" => Choice::Help,
            "q" | "quit" => Choice::Quit,
            _ => Choice::Invalid,
        }
    }
}

pub fn gen_main_menu(settings: Settings) {
    reset_terminal();
    run_menu(settings, get_editable_input);
    reset_terminal();
}

/// Menu loop over a line source. Returns when the user quits, presses
/// Ctrl+C, or input is closed; the last status (and any password in it) is
/// dropped on return.
pub fn run_menu<F>(mut settings: Settings, mut prompt: F)
where
    F: FnMut(&str, &str) -> Input,
{
    let mut status = Status::Idle;

    loop {
        clear();
        print_main_menu(&settings);
        print_status(&status);

        let input = match prompt(enter_prompt(), "") {
            Input::Line(line) => line,
            Input::Cancelled => {
                status = Status::Idle;
                continue;
            }
            Input::Interrupted | Input::Closed => break,
        };

        status = match Choice::parse(&input) {
            Choice::Generate => generate_status(&settings),
            Choice::EditLength => {
                match prompt("Enter password length", &settings.length.to_string()) {
                    Input::Line(raw) => update_length(&mut settings, &raw),
                    Input::Cancelled => Status::Idle,
                    Input::Interrupted | Input::Closed => break,
                }
            }
            Choice::ToggleLetters => {
                settings.toggle_letters();
                Status::Idle
            }
            Choice::ToggleNumbers => {
                settings.toggle_numbers();
                Status::Idle
            }
            Choice::ToggleSymbols => {
                settings.toggle_symbols();
                Status::Idle
            }
            Choice::Help => {
                clear();
                print_help();
                match prompt("Press Enter to return", "") {
                    Input::Interrupted | Input::Closed => break,
                    Input::Line(_) | Input::Cancelled => Status::Idle,
                }
            }
            Choice::Quit => break,
            Choice::Invalid => Status::Error("Invalid option.".to_string()),
        };
    }

    clear();
}

/// Validate and store a new length, reporting the outcome.
pub fn update_length(settings: &mut Settings, raw: &str) -> Status {
    match length::parse(raw, settings.max_length) {
        Ok(len) => {
            settings.length = len;
            Status::Idle
        }
        Err(e) => Status::Error(GenerateError::from(e).to_string()),
    }
}

/// Run one generation with the current settings.
pub fn generate_status(settings: &Settings) -> Status {
    let warning = settings.is_large().then(|| {
        log::debug!("length {} is above the warning threshold", settings.length);
        large_length_message(settings.warn_length)
    });

    let Ok(len) = i64::try_from(settings.length) else {
        return Status::Error(GenerateError::from(pass::LengthError::TooLong {
            length: settings.length,
            max: settings.max_length,
        })
        .to_string());
    };

    match pass::generate(len, settings.classes) {
        Ok(password) => Status::Generated { password, warning },
        Err(e) => Status::Error(e.to_string()),
    }
}
