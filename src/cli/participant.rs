//! Participant CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_participant_list;
use crate::error::SplitResult;

/// Participant subcommands
#[derive(Subcommand)]
pub enum ParticipantCommands {
    /// List the trip roster
    List,
}

/// Handle a participant command
pub fn handle_participant_command(settings: &Settings, cmd: ParticipantCommands) -> SplitResult<()> {
    match cmd {
        ParticipantCommands::List => {
            let roster = settings.roster()?;
            println!("{}", format_participant_list(&roster));
            println!("\nTotal: {} participants", roster.len());
        }
    }

    Ok(())
}
