use crate::commands::{required_arg, CommandResult, Context};
use crate::error::CommandError;
use callbook_core::{format_birthday_date, UpcomingBirthday};
use tracing::debug;

/// `add-birthday <name> <YYYY.MM.DD>`
pub fn add_birthday(ctx: &mut Context, args: &[String]) -> CommandResult {
    let name = required_arg(args, 0)?;
    let birthday = required_arg(args, 1)?;

    let record = ctx
        .directory
        .find_mut(name)
        .ok_or(CommandError::ContactNotFound)?;
    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`; a contact without a birthday counts as not found.
pub fn show_birthday(ctx: &Context, args: &[String]) -> CommandResult {
    let name = required_arg(args, 0)?;
    let birthday = ctx
        .directory
        .find(name)
        .and_then(|record| record.birthday())
        .ok_or(CommandError::ContactNotFound)?;
    Ok(format!("{}'s birthday is {}", name, birthday))
}

/// `birthdays`
pub fn birthdays(ctx: &Context) -> CommandResult {
    let today = ctx.today();
    let upcoming = ctx.directory.upcoming_birthdays(today, ctx.window);
    debug!(
        %today,
        window_days = ctx.window.days,
        matches = upcoming.len(),
        "upcoming birthdays computed"
    );

    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    let lines = upcoming.iter().map(format_upcoming).collect::<Vec<_>>();
    Ok(lines.join("\n"))
}

fn format_upcoming(item: &UpcomingBirthday) -> String {
    let date = format_birthday_date(item.observed_date);
    format!("{}: {}", item.name, date)
}
