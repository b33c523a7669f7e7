use crate::arg::args::Arg;
use crate::command::manual::ManualCatalog;
use crate::command::policies::flag_policy::{FlagDecision, FlagPolicy, HelpAtIdx};
use crate::core::context::AppContext;
use crate::core::session::CourseEntry;
use crate::core::types::{Bool, EntryAction, ExportTarget, MetadataKind};
use crate::emit::{emit_metadata, emit_schedule};
use crate::errors::Error::Parse;
use crate::errors::{Error, Result};
use crate::logging::LogTarget;
use crate::prompter::flows::config_edit::ConfigEditFlow;
use crate::prompter::flows::credentials_flow::CredentialsFlow;
use crate::prompter::prompter::Prompter;
use crate::ui::display_manager::DisplayManager;
use std::fs;
use std::path::{Path, PathBuf};

pub struct CommandCore<'a> {
    pub args: &'a [Arg],
    pub flag_policy: FlagPolicy,
}
impl<'a> CommandCore<'a> {
    pub fn new(args: &'a [Arg], flag_policy: FlagPolicy) -> Self {
        Self { args, flag_policy }
    }
}

mod sealed {
    use super::CommandCore;

    pub trait Sealed<'a> {
        fn core(&self) -> &CommandCore<'a>;
    }
}

pub trait Command<'a>: sealed::Sealed<'a> {
    fn usage(&self) -> String;
    fn perform(&self, ctx: &mut AppContext) -> Result<()>;

    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let core = self.core(); // available because Sealed is a supertrait (but not public)
        match core.flag_policy.evaluate(core.args) {
            FlagDecision::ShortCircuitUsage => {
                ctx.logger.info(self.usage(), LogTarget::ConsoleOnly);
                Ok(())
            }
            FlagDecision::ShortCircuitMsg(msg) => {
                ctx.logger.info(msg, LogTarget::ConsoleOnly);
                Ok(())
            }
            FlagDecision::Continue => self.perform(ctx),
            FlagDecision::Error(e) => Err(e),
        }
    }
}

pub type CommandDyn<'a> = Box<dyn Command<'a> + 'a>;

fn write_export(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// `add` / `del` -- mutate one schedule entry.
pub struct EntryCommand<'a> {
    core: CommandCore<'a>,
    action: EntryAction,
}

impl<'a> EntryCommand<'a> {
    pub fn new(action: EntryAction, args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAtIdx(0))]);
        Self {
            core: CommandCore::new(args, policy),
            action,
        }
    }

    fn handle_add(&self, ctx: &mut AppContext) -> Result<()> {
        let (day, name, start, end, notify) = match self.core.args {
            [
                Arg::Weekday(d),
                Arg::Name(n),
                Arg::ClockTime(s),
                Arg::ClockTime(e),
            ] => (*d, n, *s, *e, Bool(false)),
            [
                Arg::Weekday(d),
                Arg::Name(n),
                Arg::ClockTime(s),
                Arg::ClockTime(e),
                Arg::Bool(b),
            ] => (*d, n, *s, *e, *b),
            _ => {
                return Err(Parse(format!(
                    "Missing or invalid argument(s).\n{}",
                    self.usage()
                )));
            }
        };

        let entry = CourseEntry::new(name.clone(), start, end, notify);
        let stored = ctx.session.add_entry(day, entry)?;
        ctx.logger.info(
            format!("Added to {}: {}", day, stored),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }

    fn handle_remove(&self, ctx: &mut AppContext) -> Result<()> {
        let (day, number) = match self.core.args {
            [Arg::Weekday(d), Arg::Int(n)] => (*d, *n),
            _ => {
                return Err(Parse(format!(
                    "Missing or invalid argument(s).\n{}",
                    self.usage()
                )));
            }
        };

        if number < 1 {
            return Err(Error::Validation(format!(
                "Entry numbers start at 1, got {number}."
            )));
        }

        let removed = ctx.session.remove_entry(day, (number - 1) as usize)?;
        ctx.logger.info(
            format!("Removed '{}' from {}.", removed.name, day),
            LogTarget::ConsoleAndFile,
        );
        if !ctx.session.is_registered(&removed.name) {
            ctx.logger.info(
                format!(
                    "'{}' is no longer scheduled anywhere; dropped it from the course list.",
                    removed.name
                ),
                LogTarget::ConsoleAndFile,
            );
        }
        Ok(())
    }
}

impl<'a> sealed::Sealed<'a> for EntryCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for EntryCommand<'a> {
    fn usage(&self) -> String {
        match self.action {
            EntryAction::Add => {
                "Usage: add <day> \"<course>\" <start> <end> [true|false]".to_string()
            }
            EntryAction::Remove => "Usage: del <day> <number>   (numbers shown by 'show')".to_string(),
        }
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        match self.action {
            EntryAction::Add => self.handle_add(ctx),
            EntryAction::Remove => self.handle_remove(ctx),
        }
    }
}

/// `link` -- store the metadata value for a scheduled course.
pub struct LinkCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> LinkCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAtIdx(0))]);
        Self {
            core: CommandCore::new(args, policy),
        }
    }

    /// The locator kind takes any textual value; the URL kind only a URL.
    fn value_for(&self, kind: MetadataKind, arg: &Arg) -> Result<String> {
        match (kind, arg) {
            (MetadataKind::Url, Arg::Url(u)) => Ok(u.as_str().to_string()),
            (MetadataKind::Url, other) => Err(Error::Validation(format!(
                "Please enter a valid URL (e.g., https://example.com/course), got {other}."
            ))),
            (MetadataKind::Xpath, Arg::Locator(x)) => Ok(x.clone()),
            (MetadataKind::Xpath, Arg::Name(v)) => Ok(v.clone()),
            (MetadataKind::Xpath, Arg::Url(u)) => Ok(u.as_str().to_string()),
            (MetadataKind::Xpath, other) => Err(Error::Validation(format!(
                "Please enter an XPath expression (e.g., /html/body/div[4]/a), got {other}."
            ))),
        }
    }
}

impl<'a> sealed::Sealed<'a> for LinkCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for LinkCommand<'a> {
    fn usage(&self) -> String {
        "Usage: link \"<course>\" <value>   # URL or XPath, per the configured metadata kind"
            .to_string()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let (name, value_arg) = match self.core.args {
            [Arg::Name(n), v] => (n, v),
            _ => {
                return Err(Parse(format!(
                    "Missing or invalid argument(s).\n{}",
                    self.usage()
                )));
            }
        };

        let kind = ctx.config.metadata_kind();
        let value = self.value_for(kind, value_arg)?;
        ctx.session.set_metadata(name, value)?;
        ctx.logger.info(
            format!("Added {} for {}.", kind.value_label(), name),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

/// `unlink` -- drop the metadata value only; scheduling is untouched.
pub struct UnlinkCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> UnlinkCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAtIdx(0))]);
        Self {
            core: CommandCore::new(args, policy),
        }
    }
}

impl<'a> sealed::Sealed<'a> for UnlinkCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for UnlinkCommand<'a> {
    fn usage(&self) -> String {
        "Usage: unlink \"<course>\"   # Remove the stored link for a course".to_string()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let name = match self.core.args {
            [Arg::Name(n)] => n,
            _ => {
                return Err(Parse(format!(
                    "Missing or invalid argument(s).\n{}",
                    self.usage()
                )));
            }
        };

        match ctx.session.remove_metadata(name) {
            Some(_) => ctx.logger.info(
                format!("Removed the stored link for '{}'.", name),
                LogTarget::ConsoleAndFile,
            ),
            None => ctx.logger.info(
                format!("No link stored for '{}'.", name),
                LogTarget::ConsoleOnly,
            ),
        }
        Ok(())
    }
}

/// `show` -- render the current schedule and link tables.
pub struct ShowCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ShowCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAtIdx(0))]);
        Self {
            core: CommandCore::new(args, policy),
        }
    }
}

impl<'a> sealed::Sealed<'a> for ShowCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for ShowCommand<'a> {
    fn usage(&self) -> String {
        "show         # Display the current schedule and links".to_string()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let dm = DisplayManager::new();
        dm.display_schedule(&ctx.session);
        dm.display_metadata(&ctx.session, ctx.config.metadata_kind());
        Ok(())
    }
}

/// `export` -- write one of the two YAML artifacts.
pub struct ExportCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ExportCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAtIdx(0))]);
        Self {
            core: CommandCore::new(args, policy),
        }
    }

    fn export_schedule(&self, ctx: &mut AppContext) -> Result<PathBuf> {
        if !ctx.session.has_entries() {
            return Err(Error::Validation(
                "No schedule entries to export. Add courses first.".to_string(),
            ));
        }
        let yaml = emit_schedule(&ctx.session);
        write_export(&ctx.exports_dir, "course_details.yaml", &yaml)
    }

    fn export_metadata(&self, ctx: &mut AppContext) -> Result<PathBuf> {
        if ctx.session.course_names().is_empty() {
            return Err(Error::Validation(
                "No courses to export. Add courses in the schedule first.".to_string(),
            ));
        }
        let kind = ctx.config.metadata_kind();
        let yaml = emit_metadata(&ctx.session, ctx.config.placeholder());
        write_export(&ctx.exports_dir, kind.export_file_name(), &yaml)
    }
}

impl<'a> sealed::Sealed<'a> for ExportCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for ExportCommand<'a> {
    fn usage(&self) -> String {
        "Usage: export <schedule|metadata>".to_string()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let target = match self.core.args {
            [Arg::ExportTarget(t)] => *t,
            _ => {
                return Err(Parse(format!(
                    "Missing or invalid argument(s).\n{}",
                    self.usage()
                )));
            }
        };

        let path = match target {
            ExportTarget::Schedule => self.export_schedule(ctx)?,
            ExportTarget::Metadata => self.export_metadata(ctx)?,
        };
        ctx.logger.info(
            format!("Wrote {}", path.display()),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

/// `reset` -- clear courses, schedule, and links in one step.
pub struct ResetCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ResetCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAtIdx(0))]);
        Self {
            core: CommandCore::new(args, policy),
        }
    }
}

impl<'a> sealed::Sealed<'a> for ResetCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for ResetCommand<'a> {
    fn usage(&self) -> String {
        "reset        # Clear all courses, schedule entries, and links".to_string()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        ctx.session.reset();
        ctx.logger.info(
            "Cleared all courses, schedule entries, and links.",
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

/// `credentials` -- interactive flow writing the plaintext credentials file.
pub struct CredentialsCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> CredentialsCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAtIdx(0))]);
        Self {
            core: CommandCore::new(args, policy),
        }
    }
}

impl<'a> sealed::Sealed<'a> for CredentialsCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for CredentialsCommand<'a> {
    fn usage(&self) -> String {
        "credentials  # Enter LMS credentials and write the .env file".to_string()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let prompter = Prompter::new();
        let flow = CredentialsFlow::new(ctx);
        prompter.run(flow, true)
    }
}

pub struct ConfigCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ConfigCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAtIdx(0))]);
        Self {
            core: CommandCore::new(args, policy),
        }
    }

    fn edit(&self, ctx: &mut AppContext) -> Result<()> {
        let prompter = Prompter::new();
        let flow = ConfigEditFlow::new(ctx);
        prompter.run(flow, true)
    }
}

impl<'a> sealed::Sealed<'a> for ConfigCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for ConfigCommand<'a> {
    fn usage(&self) -> String {
        "config       # View and edit configuration".to_string()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        self.edit(ctx)
    }
}

pub struct LogCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> LogCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAtIdx(0))]);
        Self {
            core: CommandCore::new(args, policy),
        }
    }
}

impl<'a> sealed::Sealed<'a> for LogCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for LogCommand<'a> {
    fn usage(&self) -> String {
        "log          # Print current session log to console".to_string()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        match ctx.logger.log_path() {
            None => {
                println!("No logs");
            }
            Some(path) => match std::fs::read_to_string(&path) {
                Ok(contents) => print!("{contents}"),
                Err(err) => {
                    eprintln!("Unable to read log file: {err}");
                }
            },
        }
        Ok(())
    }
}

pub struct ManCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ManCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAtIdx(0))]);
        Self {
            core: CommandCore::new(args, policy),
        }
    }

    fn topic_arg(&self) -> Result<Option<String>> {
        match self.core.args.len() {
            0 => Ok(None),
            1 => match &self.core.args[0] {
                Arg::Name(name) => Ok(Some(name.clone())),
                other => Err(Parse(format!(
                    "Unsupported manual topic: {}. Usage: man [topic]",
                    other
                ))),
            },
            _ => Err(Parse(
                "Expected at most one topic. Usage: man [topic]".into(),
            )),
        }
    }
}

impl<'a> sealed::Sealed<'a> for ManCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for ManCommand<'a> {
    fn usage(&self) -> String {
        "man [topic]  # Show manual pages".to_string()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let topic = self.topic_arg()?;
        let page = ManualCatalog::new().page_for(topic.as_deref())?;
        ctx.logger.info(page.render(), LogTarget::ConsoleOnly);
        Ok(())
    }
}

pub struct TypeHelpCommand<'a> {
    core: CommandCore<'a>,
    command_type: crate::core::types::TypeHelpCommand,
}

impl<'a> TypeHelpCommand<'a> {
    pub fn new(args: &'a [Arg], command_type: crate::core::types::TypeHelpCommand) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAtIdx(0))]);
        Self {
            core: CommandCore::new(args, policy),
            command_type,
        }
    }
}

impl<'a> sealed::Sealed<'a> for TypeHelpCommand<'a> {
    fn core(&self) -> &CommandCore<'a> {
        &self.core
    }
}

impl<'a> Command<'a> for TypeHelpCommand<'a> {
    fn usage(&self) -> String {
        self.command_type.usage()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        ctx.logger
            .info(self.command_type.usage(), LogTarget::ConsoleOnly);
        Ok(())
    }
}
