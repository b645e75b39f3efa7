use std::io::{BufRead, Write};

use colored::Colorize;
use pf_session::StorageConfig;

use crate::game::{PlayContext, render};

pub fn run(config: &StorageConfig) -> Result<(), String> {
    main_menu(&mut super::terminal(config))
}

/// The menu shown when `pf` runs without a subcommand.
pub fn main_menu<R: BufRead, W: Write>(ctx: &mut PlayContext<R, W>) -> Result<(), String> {
    render::title(&mut ctx.output).map_err(|e| e.to_string())?;

    loop {
        render::main_menu(&mut ctx.output).map_err(|e| e.to_string())?;
        let Some(choice) = ctx.prompt("Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => super::play::new_game(ctx, None, None)?,
            "2" => super::load::resume(ctx, None)?,
            "3" => super::stats::show_global(&mut ctx.output, &ctx.stats)?,
            "4" => break,
            "" => {}
            _ => ctx.say("Invalid choice. Please try again.".red())?,
        }
    }

    ctx.say("Thanks for playing!".green())
}
