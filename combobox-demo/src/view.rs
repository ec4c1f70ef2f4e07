//! Plain-text rendering of the demo from the combobox render model.

use std::io::{self, Write};

use combobox::prelude::*;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};

use crate::app::Demo;

/// Draw the whole screen.
pub fn draw(out: &mut impl Write, demo: &Demo) -> io::Result<()> {
    let combobox = demo.combobox();
    let model = combobox.render_model();
    let multi = combobox.mode() == SelectionMode::Multiple;

    queue!(out, SetAttribute(Attribute::Reset), Clear(ClearType::All))?;

    let mut row: u16 = 0;
    let focus = if demo.is_focused() { "focused" } else { "blurred" };
    line(
        out,
        &mut row,
        &format!(
            "Country picker ({:?}) [{}] role={} expanded={}",
            combobox.mode(),
            focus,
            model.control_role.as_str(),
            model.open
        ),
        Attribute::Bold,
    )?;
    line(out, &mut row, &format!("> {}_", demo.query()), Attribute::Reset)?;

    let selected: Vec<&str> = demo
        .selection()
        .iter()
        .map(|value| demo.label_for(value))
        .collect();
    line(
        out,
        &mut row,
        &format!("Selected: {}", selected.join(", ")),
        Attribute::Dim,
    )?;
    row += 1;

    if model.open {
        for entry in &model.entries {
            let marker = if entry.active { '>' } else { ' ' };
            let text = match entry.kind {
                RenderedKind::Item if multi => {
                    let check = if entry.selected { 'x' } else { ' ' };
                    format!("{} [{}] {}", marker, check, entry.label)
                }
                RenderedKind::Item => {
                    let check = if entry.selected { '*' } else { ' ' };
                    format!("{} ({}) {}", marker, check, entry.label)
                }
                RenderedKind::Action => format!("{} + {}", marker, entry.label),
            };
            let attribute = if entry.active {
                Attribute::Reverse
            } else if entry.disabled {
                Attribute::Dim
            } else {
                Attribute::Reset
            };
            line(out, &mut row, &text, attribute)?;
        }

        if model.show_empty_state {
            line(out, &mut row, "  No matches", Attribute::Italic)?;
        }
    }

    if demo.is_loading() {
        line(out, &mut row, "  Searching...", Attribute::Italic)?;
    } else if model.open && demo.has_more() {
        line(out, &mut row, "  (more below)", Attribute::Dim)?;
    }

    row += 1;
    line(out, &mut row, demo.status(), Attribute::Reset)?;
    line(out, &mut row, &help(combobox.keymap()), Attribute::Dim)?;

    queue!(out, SetAttribute(Attribute::Reset))?;
    out.flush()
}

fn line(out: &mut impl Write, row: &mut u16, text: &str, attribute: Attribute) -> io::Result<()> {
    queue!(
        out,
        MoveTo(0, *row),
        SetAttribute(attribute),
        Print(text),
        SetAttribute(Attribute::Reset)
    )?;
    *row += 1;
    Ok(())
}

fn help(keymap: &Keymap) -> String {
    let keys = |action| {
        keymap
            .keys_for(action)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/")
    };
    format!(
        "{} next  {} previous  {} commit  {} dismiss  Tab focus  Shift+Tab blur  Ctrl+C quit",
        keys(ComboboxAction::Next),
        keys(ComboboxAction::Previous),
        keys(ComboboxAction::Commit),
        keys(ComboboxAction::Dismiss)
    )
}
