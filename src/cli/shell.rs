use std::{
    borrow::Cow,
    io::{self, BufRead, Write},
};

use crossterm::{
    cursor,
    terminal::{self, ClearType},
    ExecutableCommand,
};
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;
use tracing::debug;

use crate::config::ConfigManager;
use crate::errors::CliError;
use crate::submission::JsonFileSubmitter;
use crate::utils::build_info;
use crate::wizard::StepWizardController;

use super::commands::{self, CommandError, Feedback, Interaction, NoInteraction, COMMAND_NAMES};
use super::output::{self, OutputPreferences};
use super::prompts::TerminalInteraction;
use super::render::{render_modal, RenderCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("RENT_WIZARD_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut session = Session::new(mode)?;
    session.banner();
    session.controller.open();
    session.render()?;

    match mode {
        CliMode::Interactive => run_interactive(&mut session),
        CliMode::Script => run_script(&mut session),
    }
}

struct Session {
    mode: CliMode,
    controller: StepWizardController,
    submitter: JsonFileSubmitter,
    terminal: TerminalInteraction,
}

impl Session {
    fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new()?.load()?;
        output::set_preferences(OutputPreferences {
            plain_mode: config.plain_output || mode == CliMode::Script,
        });
        let submitter =
            JsonFileSubmitter::new(config.resolve_listings_dir(), config.user_id.clone())?;
        debug!(dir = %submitter.dir().display(), ?mode, "cli session ready");
        Ok(Self {
            mode,
            controller: StepWizardController::from_config(&config),
            submitter,
            terminal: TerminalInteraction::new(),
        })
    }

    fn banner(&self) {
        output::section("Rent Wizard");
        output::info(build_info::current().summary());
        output::info("Type `help` to see available commands.");
    }

    fn render(&self) -> Result<(), CliError> {
        if self.mode == CliMode::Interactive {
            let mut stdout = io::stdout();
            stdout.execute(terminal::Clear(ClearType::All))?;
            stdout.execute(cursor::MoveTo(0, 0))?;
            stdout.flush()?;
        }
        for line in render_modal(&self.controller.modal_view(), RenderCapabilities::default()) {
            output::plain(line);
        }
        Ok(())
    }

    fn print_all_errors(&self) {
        let errors = self
            .controller
            .policy()
            .rules
            .validate_all(self.controller.form());
        if errors.is_empty() {
            output::success("Every field is valid.");
            return;
        }
        for (key, error) in errors {
            output::warning(format!("{}: {}", key.label(), error));
        }
    }

    fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        self.terminal.confirm_exit().map_err(command_to_cli)
    }

    fn report_error(&self, err: CommandError) {
        match err {
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Type `help` for usage details.");
            }
            other => output::error(other),
        }
    }

    fn handle_line(&mut self, line: &str) -> Result<LoopControl, CliError> {
        let tokens = match split(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };
        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let mut scripted = NoInteraction;
        let result = commands::parse(&tokens).and_then(|command| {
            let interaction: &mut dyn Interaction = match self.mode {
                CliMode::Interactive => &mut self.terminal,
                CliMode::Script => &mut scripted,
            };
            commands::apply(command, &mut self.controller, &mut self.submitter, interaction)
        });

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                self.report_error(err);
                return Ok(LoopControl::Continue);
            }
        };

        if outcome.rerender {
            self.render()?;
        }
        if outcome.show_errors {
            self.print_all_errors();
        }
        for feedback in outcome.feedback {
            match feedback {
                Feedback::Info(message) => output::info(message),
                Feedback::Success(message) => output::success(message),
                Feedback::Warning(message) => output::warning(message),
                Feedback::Error(message) => output::error(message),
            }
        }

        if outcome.exit {
            return Ok(LoopControl::Exit);
        }
        Ok(LoopControl::Continue)
    }
}

fn command_to_cli(err: CommandError) -> CliError {
    match err {
        CommandError::Core(err) => CliError::Core(err),
        CommandError::Dialoguer(err) => CliError::Dialoguer(err),
        other => CliError::Input(other.to_string()),
    }
}

fn run_interactive(session: &mut Session) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(COMMAND_NAMES)));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    loop {
        match editor.readline("rent-wizard> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if session.handle_line(trimmed)? == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if session.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn run_script(session: &mut Session) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if session.handle_line(line.trim())? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

/// Completes command names at the start of the line.
struct CommandHelper {
    commands: Vec<&'static str>,
}

impl CommandHelper {
    fn new(names: &[&'static str]) -> Self {
        let mut commands = names.to_vec();
        commands.sort_unstable();
        commands.dedup();
        Self { commands }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        if prefix.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let start = prefix.len() - prefix.trim_start().len();
        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}
