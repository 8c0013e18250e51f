use std::io::{stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::style::Color::{DarkBlue, DarkCyan, DarkGreen, Red, Reset, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, queue, terminal, ExecutableCommand};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use qmenu_core::error::Result;

use super::types::CycleDirection::{Down, Up};
use super::types::{CycleDirection, UiState};
use crate::navigator::{Choice, MenuOption, OptionPrompt};

/// Marker appended to branch labels so submenus read like directories.
const BRANCH_SUFFIX: char = '/';

/// The crossterm-backed prompt used by the interactive session.
///
/// Each `choose` call owns the terminal for its whole duration: it enters
/// the alternate screen and raw mode, and restores both before returning so
/// selected commands run against a normal terminal.
pub struct TerminalPrompt;

impl OptionPrompt for TerminalPrompt {
    fn choose(&mut self, title: &str, options: &[MenuOption]) -> Result<Choice> {
        prompt_for_choice(title, options)
    }
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Prompts the operator to choose one of `options`, returning the selected
/// index into `options` or a cancellation.
pub fn prompt_for_choice(title: &str, options: &[MenuOption]) -> Result<Choice> {
    let mut stdout = stdout();

    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, the terminal is restored

    let (width, height) = terminal::size()?;
    let mut ui_state = UiState::new(width, height);

    loop {
        let visible = filter_visible_indexes(options, &ui_state.filter_text);
        if ui_state.selected_index >= visible.len() {
            ui_state.selected_index = visible.len().saturating_sub(1);
        }

        redraw_ui(title, &ui_state, options, &visible)?;

        match event::read()? {
            Event::Key(key_event) => {
                if let Some(choice) = handle_key_event(key_event, &mut ui_state, &visible)? {
                    return Ok(choice);
                }
            }
            Event::Resize(new_width, new_height) => {
                ui_state.viewport.width = new_width;
                ui_state.viewport.height = new_height.saturating_sub(2);
            }
            _ => {}
        }
    }
}

/// Handle one keyboard event; `Some` means the prompt is finished.
fn handle_key_event(
    key_event: event::KeyEvent,
    ui_state: &mut UiState,
    visible: &[usize],
) -> Result<Option<Choice>> {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(Some(Choice::Cancelled));
        }
        KeyCode::Up => move_selected_index(ui_state, visible.len(), Up),
        KeyCode::Down => move_selected_index(ui_state, visible.len(), Down),
        KeyCode::Char('k') if !ui_state.is_filtering => {
            move_selected_index(ui_state, visible.len(), Up);
        }
        KeyCode::Char('j') if !ui_state.is_filtering => {
            move_selected_index(ui_state, visible.len(), Down);
        }
        KeyCode::Enter => {
            if let Some(original_index) = visible.get(ui_state.selected_index) {
                return Ok(Some(Choice::Selected(*original_index)));
            }
            queue!(stdout(), Print("\x07"))?;
        }
        KeyCode::Backspace => {
            if !ui_state.filter_text.is_empty() {
                ui_state.filter_text.pop();
                ui_state.selected_index = 0;
            }
        }
        KeyCode::Esc if ui_state.is_filtering => {
            ui_state.is_filtering = false;
            ui_state.filter_text.clear();
            ui_state.selected_index = 0;
        }
        KeyCode::Esc => return Ok(Some(Choice::Cancelled)),
        KeyCode::Char('/') if !ui_state.is_filtering => ui_state.is_filtering = true,
        KeyCode::Char('q') if !ui_state.is_filtering => return Ok(Some(Choice::Cancelled)),
        KeyCode::Char(c) if ui_state.is_filtering => {
            ui_state.filter_text.push(c);
            ui_state.selected_index = 0;
        }
        _ => {}
    }

    Ok(None)
}

fn redraw_ui(
    title: &str,
    ui_state: &UiState,
    options: &[MenuOption],
    visible: &[usize],
) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(title, ui_state, visible.len())?;

    if visible.is_empty() {
        queue!(
            stdout,
            SetForegroundColor(Red),
            Print("No matching entries!".to_string()),
            SetAttribute(Attribute::Reset),
            cursor::MoveToNextLine(1)
        )?;
    } else {
        print_options_with_selection(ui_state, options, visible)?;
    }

    if ui_state.is_filtering {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", ui_state.filter_text)),
            SetAttribute(Attribute::Reset)
        )?;
    }

    stdout.flush()?;
    Ok(())
}

/// Print the status bar: breadcrumb title, position, key hints.
fn print_header(title: &str, ui_state: &UiState, visible_count: usize) -> Result<()> {
    let mut stdout = stdout();
    let width = ui_state.viewport.width as usize;

    let instructions = if ui_state.is_filtering {
        "<esc>: Stop Filtering".to_string()
    } else {
        format!(
            "{}/{}   |   /: Filter   |   q: Back",
            ui_state.selected_index.saturating_add(1).min(visible_count.max(1)),
            visible_count
        )
    };

    let content = format!("  {title}   |   {instructions}");
    let padding = " ".repeat(width.saturating_sub(content.len()));

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(content),
        Print(padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
        cursor::MoveToNextLine(1),
    )?;

    Ok(())
}

fn print_options_with_selection(
    ui_state: &UiState,
    options: &[MenuOption],
    visible: &[usize],
) -> Result<()> {
    let mut stdout = stdout();
    let viewport = &ui_state.viewport;

    let visible_rows = visible
        .iter()
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (row, original_index) in visible_rows.enumerate() {
        let is_selected = row + viewport.offset == ui_state.selected_index;
        write_option_row(
            row as u16 + 1,
            options,
            *original_index,
            is_selected,
            viewport.width,
        )?;
        queue!(stdout, cursor::MoveToNextLine(1))?;
    }

    Ok(())
}

fn write_option_row(
    row: u16,
    options: &[MenuOption],
    original_index: usize,
    is_selected: bool,
    terminal_width: u16,
) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, MoveTo(0, row), Clear(ClearType::CurrentLine))?;

    let Some(option) = options.get(original_index) else {
        return Ok(());
    };

    let index_width = format!("{}", options.len()).len();
    let number = format!("[{:>index_width$}]", original_index + 1);
    let suffix = if option.is_branch {
        String::from(BRANCH_SUFFIX)
    } else {
        String::new()
    };
    let content = format!("{number} {}{suffix}", option.label);

    let padding = if content.len() < terminal_width as usize {
        " ".repeat(terminal_width as usize - content.len())
    } else {
        String::new()
    };

    if is_selected {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
        )?;
    } else if option.is_branch {
        queue!(stdout, SetForegroundColor(DarkCyan))?;
    }

    queue!(stdout, Print(content), Print(padding))?;

    queue!(
        stdout,
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Move the highlighted row, wrapping at either end and keeping it inside
/// the viewport.
fn move_selected_index(ui_state: &mut UiState, visible_count: usize, direction: CycleDirection) {
    if visible_count == 0 {
        return;
    }

    let height = ui_state.viewport.height.max(1) as usize;

    match direction {
        Up => {
            if ui_state.selected_index == 0 {
                ui_state.selected_index = visible_count - 1;
                ui_state.viewport.offset = visible_count.saturating_sub(height);
            } else {
                ui_state.selected_index -= 1;
                if ui_state.selected_index < ui_state.viewport.offset {
                    ui_state.viewport.offset = ui_state.selected_index;
                }
            }
        }
        Down => {
            ui_state.selected_index = (ui_state.selected_index + 1) % visible_count;
            if ui_state.selected_index == 0 {
                ui_state.viewport.offset = 0;
            } else if ui_state.selected_index >= ui_state.viewport.offset + height {
                ui_state.viewport.offset = ui_state.selected_index - height + 1;
            }
        }
    }
}

/// Indexes into `options` that survive the filter, in display order.
///
/// A numeric filter matches against the 1-based entry numbers; anything else
/// fuzzy-matches the labels.
fn filter_visible_indexes(options: &[MenuOption], filter_text: &str) -> Vec<usize> {
    if filter_text.is_empty() {
        return (0..options.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let numeric_filter = filter_text.parse::<usize>().is_ok();

    options
        .iter()
        .enumerate()
        .filter_map(|(index, option)| {
            if numeric_filter {
                (index + 1)
                    .to_string()
                    .contains(filter_text)
                    .then_some(index)
            } else {
                matcher.fuzzy_match(&option.label, filter_text).map(|_| index)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(labels: &[(&str, bool)]) -> Vec<MenuOption> {
        labels
            .iter()
            .map(|(label, is_branch)| MenuOption {
                label: (*label).to_string(),
                is_branch: *is_branch,
            })
            .collect()
    }

    #[test]
    fn empty_filter_shows_everything_in_order() {
        let opts = options(&[("Build", false), ("Tools", true), ("Deploy", false)]);
        assert_eq!(filter_visible_indexes(&opts, ""), vec![0, 1, 2]);
    }

    #[test]
    fn fuzzy_filter_matches_labels() {
        let opts = options(&[("Build", false), ("Tools", true), ("Deploy", false)]);
        assert_eq!(filter_visible_indexes(&opts, "dep"), vec![2]);
        assert_eq!(filter_visible_indexes(&opts, "l"), vec![0, 1, 2]);
    }

    #[test]
    fn numeric_filter_matches_entry_numbers() {
        let opts = options(&[("Build", false), ("Tools", true), ("Deploy", false)]);
        assert_eq!(filter_visible_indexes(&opts, "2"), vec![1]);
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let opts = options(&[("Build", false)]);
        assert!(filter_visible_indexes(&opts, "zzz").is_empty());
    }

    #[test]
    fn selection_wraps_at_both_ends() {
        let mut state = UiState::new(80, 24);

        move_selected_index(&mut state, 3, Up);
        assert_eq!(state.selected_index, 2);

        move_selected_index(&mut state, 3, Down);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn moving_down_past_the_viewport_scrolls() {
        let mut state = UiState::new(80, 4); // viewport height 2

        for _ in 0..2 {
            move_selected_index(&mut state, 5, Down);
        }
        assert_eq!(state.selected_index, 2);
        assert_eq!(state.viewport.offset, 1);
    }

    #[test]
    fn moving_on_an_empty_list_is_a_no_op() {
        let mut state = UiState::new(80, 24);
        move_selected_index(&mut state, 0, Down);
        assert_eq!(state.selected_index, 0);
    }
}
