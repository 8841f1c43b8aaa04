//! Markdown terminal formatting using termimad

use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print a markdown report, styled when the terminal allows it
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        skin().print_text(markdown);
    } else {
        println!("{}", markdown.trim_end());
    }
}

fn skin() -> MadSkin {
    use termimad::crossterm::style::{Attribute, Color::*};

    let mut skin = MadSkin::default();
    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.bold.set_fg(Yellow);
    skin.table.set_fg(White);
    skin
}
