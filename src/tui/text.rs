use crate::settings::Settings;
use crate::terminal::{
    BOLD, GREEN, RESET, box_bottom, box_line, box_line_center, box_opt, box_top, flush,
    print_error, print_warning, wrap_chunks,
};

use super::Status;

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

fn on_off(enabled: bool) -> String {
    if enabled {
        format!("{GREEN}[x]{RESET}")
    } else {
        "[ ]".to_string()
    }
}

pub fn print_main_menu(settings: &Settings) {
    box_top("Secure Password Generator");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");
    box_line(&format!("  1) Password Length: {BOLD}{}{RESET}", settings.length));
    box_line("");
    box_line("  Character Types:");
    box_line(&format!("  2) {} Include Letters (a-z, A-Z)", on_off(settings.classes.letters)));
    box_line(&format!("  3) {} Include Numbers (0-9)", on_off(settings.classes.numbers)));
    box_line(&format!("  4) {} Include Symbols (!\"#$%&... ~)", on_off(settings.classes.symbols)));
    box_line("");
    box_line("  h) help  |  q) quit");
    box_bottom();
}

pub fn print_status(status: &Status) {
    match status {
        Status::Idle => println!(),
        Status::Error(msg) => print_error(msg),
        Status::Generated { password, warning } => {
            if let Some(w) = warning {
                print_warning(w);
            }
            println!();
            box_top("Generated Password");
            for chunk in wrap_chunks(password) {
                box_line(&chunk);
            }
            box_bottom();
        }
    }
    println!();
    flush();
}

pub fn print_help() {
    box_top("securepass");
    box_line_center("Random passwords from letters, digits and symbols");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments in a terminal.");
    box_line("  2) Client: pass flags (e.g. -l 20 -n 5) to print passwords.");
    box_line("");
    box_line("USAGE:");
    box_line("  securepass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Characters per password (12)");
    box_opt("  -n, --number <N>", "Passwords to print (1)");
    box_opt("      --no-letters", "Leave out a-z, A-Z");
    box_opt("      --no-numbers", "Leave out 0-9");
    box_opt("      --no-symbols", "Leave out ASCII punctuation");
    box_opt("      --max-length <N>", "Refuse longer lengths");
    box_opt("      --warn-length <N>", "Warn above this length");
    box_opt("  -q, --quiet", "Only passwords and errors");
    box_opt("  -i, --interactive", "Open this menu");
    box_line("");
    box_line("ENVIRONMENT:");
    box_line("  SECUREPASS_LENGTH, SECUREPASS_NUMBER,");
    box_line("  SECUREPASS_MAX_LENGTH, SECUREPASS_WARN_LENGTH");
    box_line("  RUST_LOG (e.g. debug) for diagnostics on stderr");
    box_bottom();
    println!();
    flush();
}
