//! Interactive menu loop.
//!
//! Waits for a choice, runs the action against the session and returns to
//! the menu. Core errors are shown and the loop continues; anything else
//! (file I/O, a closed terminal) ends the program without saving.

use notes_core::{NoteField, NotesError};

use crate::app::{AppContext, LoadPolicy, Session};
use crate::errors::hint_for;
use crate::ui::render::{note_detail, notes_table};
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, print_error, prompt, Badge, UiContext};

use super::notes::position_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    List,
    Details,
    Add,
    Edit,
    Delete,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 6] = [
        MenuAction::List,
        MenuAction::Details,
        MenuAction::Add,
        MenuAction::Edit,
        MenuAction::Delete,
        MenuAction::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::List => "1. List notes",
            MenuAction::Details => "2. Show note details",
            MenuAction::Add => "3. Add a note",
            MenuAction::Edit => "4. Edit a note",
            MenuAction::Delete => "5. Delete a note",
            MenuAction::Exit => "0. Save and exit",
        }
    }
}

pub fn run_menu(ctx: &AppContext<'_>) -> anyhow::Result<()> {
    let ui = UiContext::detect();
    let mut session = ctx.open_session(LoadPolicy::Recover)?;
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        let action = MenuAction::ALL[prompt::select("Choose an action", &labels)?];
        if action == MenuAction::Exit {
            session.save()?;
            if !ctx.quiet() {
                println!(
                    "{}",
                    badge(
                        &ui,
                        Badge::Ok,
                        &format!("Saved to {}", session.path().display())
                    )
                );
            }
            return Ok(());
        }

        if let Err(err) = dispatch(action, &mut session, &ui) {
            match recoverable(&err) {
                Some(notes_err) => {
                    tracing::debug!(?action, "action failed");
                    print_error(&ui, &err.to_string(), hint_for(notes_err));
                }
                None => return Err(err),
            }
        }
    }
}

/// The core error behind `err` if the menu can report it and carry on.
///
/// Storage failures and errors from outside the store (a closed terminal,
/// a failed prompt) end the loop.
fn recoverable(err: &anyhow::Error) -> Option<&NotesError> {
    err.downcast_ref::<NotesError>()
        .filter(|notes_err| notes_err.is_recoverable())
}

fn dispatch(action: MenuAction, session: &mut Session, ui: &UiContext) -> anyhow::Result<()> {
    match action {
        MenuAction::List => list(session, ui),
        MenuAction::Details => details(session, ui),
        MenuAction::Add => add(session, ui),
        MenuAction::Edit => edit(session, ui),
        MenuAction::Delete => delete(session, ui),
        MenuAction::Exit => Ok(()),
    }
}

fn list(session: &Session, ui: &UiContext) -> anyhow::Result<()> {
    let notes = session.store().list(session.password())?;
    println!("{}", notes_table(ui, &notes));
    Ok(())
}

fn details(session: &Session, ui: &UiContext) -> anyhow::Result<()> {
    if empty(session, ui) {
        return Ok(());
    }
    let number = prompt::note_number("Note number")?;
    let position = position_for(session.store(), number)?;
    let view = session.store().get(position, session.password())?;
    println!("{}", note_detail(ui, &view));
    Ok(())
}

fn add(session: &mut Session, ui: &UiContext) -> anyhow::Result<()> {
    let date = prompt::date("Date")?;
    let title = prompt::required_text("Title")?;
    let body = prompt::required_text("Body")?;

    let (store, password) = session.parts_mut();
    let position = store.add(date, &title, &body, password)?;
    println!(
        "{}",
        badge(ui, Badge::Ok, &format!("Added note {}", position + 1))
    );
    Ok(())
}

fn edit(session: &mut Session, ui: &UiContext) -> anyhow::Result<()> {
    if empty(session, ui) {
        return Ok(());
    }
    let number = prompt::note_number("Note number")?;
    let position = position_for(session.store(), number)?;

    let choice = prompt::select("Change which field?", &["Date", "Title", "Body", "Cancel"])?;
    let (store, password) = session.parts_mut();
    let message = match choice {
        0 => {
            let date = prompt::date("New date")?;
            let new_position = store.update_date(position, date)?;
            format!("Date changed; this is now note {}", new_position + 1)
        }
        1 | 2 => {
            let field = if choice == 1 {
                NoteField::Title
            } else {
                NoteField::Body
            };
            let text = prompt::required_text(&format!("New {}", field))?;
            store.update_field(position, field, &text, password)?;
            format!("Updated the {} of note {}", field, number)
        }
        _ => return Ok(()),
    };
    println!("{}", badge(ui, Badge::Ok, &message));
    Ok(())
}

fn delete(session: &mut Session, ui: &UiContext) -> anyhow::Result<()> {
    if empty(session, ui) {
        return Ok(());
    }
    let number = prompt::note_number("Note number")?;
    let position = position_for(session.store(), number)?;
    if !prompt::confirm(&format!("Delete note {}?", number))? {
        return Ok(());
    }

    let (store, _) = session.parts_mut();
    store.remove(position)?;
    println!(
        "{}",
        badge(ui, Badge::Ok, &format!("Deleted note {}", number))
    );
    Ok(())
}

/// Print a notice and return true when there is nothing to pick from.
fn empty(session: &Session, ui: &UiContext) -> bool {
    if session.store().is_empty() {
        println!("{}", styled("No notes yet.", styles::dim(), ui.color));
        return true;
    }
    false
}
