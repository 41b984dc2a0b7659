use crate::{
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PhrasesArgs {
    #[arg(long, help = "List the hour words instead of the minutes")]
    hours: bool,
}

pub fn cmd(args: PhrasesArgs) -> Result<()> {
    msg_print!(Message::PhrasesHeader, true);
    if args.hours {
        View::hours()?;
    } else {
        View::phrases()?;
    }
    Ok(())
}
