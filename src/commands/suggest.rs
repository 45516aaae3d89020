use crate::api::suggest::{is_diagnostic, Suggester};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Task title to draft a description for
    #[arg(required = true, num_args = 1..)]
    title: Vec<String>,
}

pub async fn cmd(suggest_args: SuggestArgs) -> Result<()> {
    let config = Config::read()?;
    let suggester = Suggester::new(config.suggest.as_ref());

    let suggestion = suggester.suggest(&suggest_args.title.join(" ")).await;
    if is_diagnostic(&suggestion) {
        msg_warning!(suggestion);
    } else {
        msg_print!(Message::SuggestedDescription, true);
        msg_print!(suggestion);
    }

    Ok(())
}
