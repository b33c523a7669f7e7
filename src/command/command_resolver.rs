use crate::arg::args::Arg;
use crate::command::commands::{
    CommandDyn, ConfigCommand, CredentialsCommand, EntryCommand, ExportCommand, LinkCommand,
    LogCommand, ManCommand, ResetCommand, ShowCommand, UnlinkCommand,
};
use crate::core::types::{EntryAction, GlobalCommand, MetadataAction, TypeHelpCommand};
use crate::errors::Result;

pub trait CommandResolver {
    fn can_resolve(&self, command: &str) -> bool;
    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>>;
}

/// `add` / `del` schedule-entry verbs.
pub struct EntryResolver;

impl CommandResolver for EntryResolver {
    fn can_resolve(&self, command: &str) -> bool {
        EntryAction::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        let action = EntryAction::try_from(command)?;
        Ok(Box::new(EntryCommand::new(action, args)))
    }
}

/// `link` / `unlink` metadata verbs.
pub struct MetadataResolver;

impl CommandResolver for MetadataResolver {
    fn can_resolve(&self, command: &str) -> bool {
        MetadataAction::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        let action = MetadataAction::try_from(command)?;
        match action {
            MetadataAction::Link => Ok(Box::new(LinkCommand::new(args))),
            MetadataAction::Unlink => Ok(Box::new(UnlinkCommand::new(args))),
        }
    }
}

pub struct GlobalResolver;

impl CommandResolver for GlobalResolver {
    fn can_resolve(&self, command: &str) -> bool {
        GlobalCommand::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        let command_type = GlobalCommand::try_from(command)?;
        match command_type {
            GlobalCommand::Show => Ok(Box::new(ShowCommand::new(args))),
            GlobalCommand::Export => Ok(Box::new(ExportCommand::new(args))),
            GlobalCommand::Reset => Ok(Box::new(ResetCommand::new(args))),
            GlobalCommand::Credentials => Ok(Box::new(CredentialsCommand::new(args))),
            GlobalCommand::Config => Ok(Box::new(ConfigCommand::new(args))),
            GlobalCommand::Log => Ok(Box::new(LogCommand::new(args))),
            GlobalCommand::Man => Ok(Box::new(ManCommand::new(args))),
        }
    }
}

pub struct TypeHelpResolver;

impl CommandResolver for TypeHelpResolver {
    fn can_resolve(&self, command: &str) -> bool {
        TypeHelpCommand::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        let command_type = TypeHelpCommand::try_from(command)?;
        Ok(Box::new(crate::command::commands::TypeHelpCommand::new(
            args,
            command_type,
        )))
    }
}
