use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("Passforge");
    box_line_center("Random passwords with a strength meter");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a");
    box_line("     form to adjust length/toggles and copy the");
    box_line("     result to the clipboard.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5)");
    box_line("     to generate passwords without the form.");
    box_line("");
    box_line("USAGE:");
    box_line("  passforge [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Characters per password, 6-32 (default: 12)");
    box_opt("  -n, --number <N>", "How many passwords to generate");
    box_opt("      --no-symbols", "Letters and digits only");
    box_opt("      --no-digits", "Letters and symbols only");
    box_opt("      --check <PASS>", "Rate an existing password");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Passwords only, no strength column");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passforge                Interactive form");
    box_line("  passforge -l 16          One password, 16 chars");
    box_line("  passforge -l 20 -n 3     Three passwords");
    box_line("  passforge --no-symbols   Alphanumeric only");
    box_line("  passforge --check 'hunter2'");
    box_line("");
    box_bottom();
    println!();
}
