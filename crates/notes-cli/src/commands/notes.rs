use anyhow::Context;

use notes_core::date::parse_date;
use notes_core::NoteStore;

use crate::app::{AppContext, LoadPolicy};
use crate::cli::{AddArgs, EditArgs, ListArgs, ShowArgs};
use crate::ui::render::{note_detail, note_json, notes_json, notes_table};
use crate::ui::{badge, Badge, UiContext};

pub fn handle_list(ctx: &AppContext<'_>, args: &ListArgs) -> anyhow::Result<()> {
    let ui = UiContext::from_env(args.json, args.format.as_deref())?;
    let session = ctx.open_session(LoadPolicy::Strict)?;
    let notes = session.store().list(session.password())?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&notes_json(&notes))?);
    } else if !notes.is_empty() || (ui.mode.is_pretty() && !ctx.quiet()) {
        println!("{}", notes_table(&ui, &notes));
    }
    Ok(())
}

pub fn handle_show(ctx: &AppContext<'_>, args: &ShowArgs) -> anyhow::Result<()> {
    let ui = UiContext::from_env(args.json, None)?;
    let session = ctx.open_session(LoadPolicy::Strict)?;
    let position = position_for(session.store(), args.number)?;
    let view = session.store().get(position, session.password())?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&note_json(args.number, &view))?);
    } else {
        println!("{}", note_detail(&ui, &view));
    }
    Ok(())
}

pub fn handle_add(ctx: &AppContext<'_>, args: &AddArgs) -> anyhow::Result<()> {
    let date = parse_date(&args.date)?;

    let mut session = ctx.open_session(LoadPolicy::Strict)?;
    let (store, password) = session.parts_mut();
    let position = store.add(date, &args.title, &args.body, password)?;
    session.save()?;

    if !ctx.quiet() {
        let ui = UiContext::detect();
        println!(
            "{}",
            badge(&ui, Badge::Ok, &format!("Added note {}", position + 1))
        );
    }
    Ok(())
}

pub fn handle_edit(ctx: &AppContext<'_>, args: &EditArgs) -> anyhow::Result<()> {
    let date = args.date.as_deref().map(parse_date).transpose()?;

    let mut session = ctx.open_session(LoadPolicy::Strict)?;
    let (store, password) = session.parts_mut();
    let mut position = position_for(store, args.number)?;

    if let Some(title) = args.title.as_deref() {
        store.update_title(position, title, password)?;
    }
    if let Some(body) = args.body.as_deref() {
        store.update_body(position, body, password)?;
    }
    // Date last: it is the only change that moves the note.
    if let Some(date) = date {
        position = store.update_date(position, date)?;
    }
    session.save()?;

    if !ctx.quiet() {
        let ui = UiContext::detect();
        let message = if position + 1 == args.number {
            format!("Updated note {}", args.number)
        } else {
            format!("Updated note {} (now note {})", args.number, position + 1)
        };
        println!("{}", badge(&ui, Badge::Ok, &message));
    }
    Ok(())
}

pub fn handle_remove(ctx: &AppContext<'_>, number: usize) -> anyhow::Result<()> {
    let mut session = ctx.open_session(LoadPolicy::Strict)?;
    let (store, _) = session.parts_mut();
    let position = position_for(store, number)?;
    store.remove(position)?;
    session.save()?;

    if !ctx.quiet() {
        let ui = UiContext::detect();
        println!("{}", badge(&ui, Badge::Ok, &format!("Removed note {}", number)));
    }
    Ok(())
}

/// Resolve a user-facing note number, naming it in the error.
pub(crate) fn position_for(store: &NoteStore, number: usize) -> anyhow::Result<usize> {
    store
        .position_for_number(number)
        .with_context(|| format!("Note {} does not exist", number))
}
