use crate::arg::args::Arg;
use crate::command::command_resolver::{
    CommandResolver, EntryResolver, GlobalResolver, MetadataResolver, TypeHelpResolver,
};
use crate::command::commands::CommandDyn;
use crate::errors::{Error, Result};

pub struct CommandParser {
    registry: Vec<Box<dyn CommandResolver>>,
}

impl CommandParser {
    pub fn new() -> Self {
        Self {
            registry: vec![
                Box::new(EntryResolver),
                Box::new(MetadataResolver),
                Box::new(GlobalResolver),
                Box::new(TypeHelpResolver),
            ],
        }
    }

    pub fn parse<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        for r in &self.registry {
            if r.can_resolve(command) {
                return r.resolve(command, args);
            }
        }
        Err(Error::UnknownCommand(command.to_string()))
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
