use colored::Colorize;
use principia::api::{CmdMessage, FilterPass, MessageLevel};
use principia::config::PrincipiaConfig;
use principia::error::Result;

/// Info messages are progress chatter and only show with `--verbose`.
pub(super) fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Info if verbose => println!("{}", message.content.dimmed()),
            MessageLevel::Info => {}
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_passes(passes: &[FilterPass], separator: &str) {
    for (i, pass) in passes.iter().enumerate() {
        if i > 0 {
            println!("{}", separator);
        }
        for product in &pass.products {
            println!("{} is {}", product.name, product.color);
        }
    }
}

pub(super) fn print_passes_json(passes: &[FilterPass]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(passes)?);
    Ok(())
}

pub(super) fn print_journal_views(views: &[String]) {
    for view in views {
        println!("{}", view);
    }
}

pub(super) fn print_config(config: &PrincipiaConfig) {
    println!("separator = {}", config.separator);
    println!("save-destination = {}", config.save_destination);
    println!("overwrite = {}", config.overwrite);
}
