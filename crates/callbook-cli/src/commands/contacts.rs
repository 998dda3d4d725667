use crate::commands::{required_arg, CommandResult, Context};
use crate::error::CommandError;
use callbook_core::{Name, Record};
use tracing::debug;

/// `add <name> [phone...]`
pub fn add_contact(ctx: &mut Context, args: &[String]) -> CommandResult {
    let (name, phones) = args.split_first().ok_or(CommandError::MissingArguments)?;

    let message = if ctx.directory.find(name).is_some() {
        "Contact updated."
    } else {
        ctx.directory.add_record(Record::new(Name::new(name)?));
        debug!(name = %name, "contact created");
        "Contact added."
    };

    let record = ctx
        .directory
        .find_mut(name)
        .ok_or(CommandError::ContactNotFound)?;
    for phone in phones {
        record.add_phone(phone)?;
    }
    debug!(name = %name, phones = record.phones().len(), "phones stored");
    Ok(message.to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(ctx: &mut Context, args: &[String]) -> CommandResult {
    let name = required_arg(args, 0)?;
    let old_phone = required_arg(args, 1)?;
    let new_phone = required_arg(args, 2)?;

    let record = ctx
        .directory
        .find_mut(name)
        .ok_or(CommandError::ContactNotFound)?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(ctx: &Context, args: &[String]) -> CommandResult {
    let name = required_arg(args, 0)?;
    let record = ctx
        .directory
        .find(name)
        .ok_or(CommandError::ContactNotFound)?;
    Ok(record.to_string())
}

/// `all`
pub fn show_all(ctx: &Context) -> CommandResult {
    if ctx.directory.is_empty() {
        return Ok("No contacts found.".to_string());
    }
    let mut lines = Vec::with_capacity(ctx.directory.len());
    for record in &ctx.directory {
        lines.push(record.to_string());
    }
    Ok(lines.join("\n"))
}
