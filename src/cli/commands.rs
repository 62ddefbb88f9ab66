use strsim::levenshtein;
use thiserror::Error;

use crate::errors::WizardError;
use crate::listing::{find_category, find_country, FieldKey, LocationValue};
use crate::submission::SubmissionHandler;
use crate::wizard::{Effect, ModalAction, StepWizardController};

pub const COMMAND_NAMES: &[&str] = &[
    "open",
    "close",
    "next",
    "back",
    "category",
    "location",
    "guests",
    "rooms",
    "bathrooms",
    "image",
    "title",
    "description",
    "price",
    "show",
    "errors",
    "help",
    "exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterChange {
    Increment,
    Decrement,
    Set(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open,
    Close,
    Next,
    Back,
    /// `None` asks the interaction layer to pick one.
    Category(Option<String>),
    Location(Option<String>),
    Counter(FieldKey, CounterChange),
    Image(String),
    Title(String),
    Description(String),
    Price(u32),
    Show,
    Errors,
    Help,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command `{input}`.{}", suggestion_suffix(.suggestion))]
    Unknown {
        input: String,
        suggestion: Option<&'static str>,
    },
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] WizardError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

fn suggestion_suffix(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(name) => format!(" Did you mean `{name}`?"),
        None => " Type `help` to see available commands.".into(),
    }
}

fn suggest(input: &str) -> Option<&'static str> {
    COMMAND_NAMES
        .iter()
        .map(|name| (levenshtein(name, input), *name))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= 3)
        .map(|(_, name)| name)
}

pub fn parse(tokens: &[String]) -> Result<Command, CommandError> {
    let Some(raw) = tokens.first() else {
        return Err(CommandError::InvalidArguments("Empty command".into()));
    };
    let name = raw.to_ascii_lowercase();
    let rest = &tokens[1..];
    let joined = || rest.join(" ");

    let command = match name.as_str() {
        "open" => Command::Open,
        "close" => Command::Close,
        "next" => Command::Next,
        "back" => Command::Back,
        "category" => Command::Category(optional(rest)),
        "location" => Command::Location(optional(rest)),
        "guests" => Command::Counter(FieldKey::GuestCount, counter_change(&name, rest)?),
        "rooms" => Command::Counter(FieldKey::RoomCount, counter_change(&name, rest)?),
        "bathrooms" => Command::Counter(FieldKey::BathroomCount, counter_change(&name, rest)?),
        "image" => Command::Image(joined()),
        "title" => Command::Title(joined()),
        "description" => Command::Description(joined()),
        "price" => {
            let value = rest
                .first()
                .ok_or_else(|| CommandError::InvalidArguments("Usage: price <amount>".into()))?;
            Command::Price(parse_number(value.trim_start_matches('$'))?)
        }
        "show" => Command::Show,
        "errors" => Command::Errors,
        "help" => Command::Help,
        "exit" | "quit" => Command::Exit,
        _ => {
            return Err(CommandError::Unknown {
                suggestion: suggest(&name),
                input: raw.clone(),
            })
        }
    };
    Ok(command)
}

fn optional(rest: &[String]) -> Option<String> {
    if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    }
}

fn counter_change(name: &str, rest: &[String]) -> Result<CounterChange, CommandError> {
    match rest.first().map(String::as_str) {
        Some("+") => Ok(CounterChange::Increment),
        Some("-") => Ok(CounterChange::Decrement),
        Some(value) => parse_number(value).map(CounterChange::Set),
        None => Err(CommandError::InvalidArguments(format!(
            "Usage: {name} <n|+|->"
        ))),
    }
}

fn parse_number(value: &str) -> Result<u32, CommandError> {
    value
        .parse::<u32>()
        .map_err(|_| CommandError::InvalidArguments(format!("`{value}` is not a whole number")))
}

/// Interactive choices a command may need when its argument is omitted.
pub trait Interaction {
    fn pick_category(&mut self, current: &str) -> Result<Option<String>, CommandError>;
    fn pick_location(
        &mut self,
        current: Option<&LocationValue>,
    ) -> Result<Option<LocationValue>, CommandError>;
}

/// Interaction used in script mode: nothing can be picked without an argument.
pub struct NoInteraction;

impl Interaction for NoInteraction {
    fn pick_category(&mut self, _current: &str) -> Result<Option<String>, CommandError> {
        Err(CommandError::InvalidArguments(
            "Usage: category <label>".into(),
        ))
    }

    fn pick_location(
        &mut self,
        _current: Option<&LocationValue>,
    ) -> Result<Option<LocationValue>, CommandError> {
        Err(CommandError::InvalidArguments(
            "Usage: location <country code or name>".into(),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Info(String),
    Success(String),
    Warning(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct Outcome {
    pub feedback: Vec<Feedback>,
    pub rerender: bool,
    pub show_errors: bool,
    pub exit: bool,
}

impl Outcome {
    fn rerender() -> Self {
        Self {
            rerender: true,
            ..Self::default()
        }
    }

    fn push(mut self, feedback: Feedback) -> Self {
        self.feedback.push(feedback);
        self
    }
}

pub fn apply(
    command: Command,
    controller: &mut StepWizardController,
    submitter: &mut dyn SubmissionHandler,
    interaction: &mut dyn Interaction,
) -> Result<Outcome, CommandError> {
    if !controller.is_open() && requires_open(&command) {
        return Ok(Outcome::default().push(Feedback::Warning(
            "The wizard is closed. Type `open` first.".into(),
        )));
    }

    let outcome = match command {
        Command::Open => {
            controller.open();
            Outcome::rerender()
        }
        Command::Close => {
            let effect = controller.on_modal_action(ModalAction::Close);
            handle_effect(effect, controller, submitter)?
        }
        Command::Next => {
            let effect = controller.on_modal_action(ModalAction::Primary);
            handle_effect(effect, controller, submitter)?
        }
        Command::Back => {
            let effect = controller.on_modal_action(ModalAction::Secondary);
            handle_effect(effect, controller, submitter)?
        }
        Command::Category(label) => {
            let label = match label {
                Some(label) => Some(label),
                None => interaction.pick_category(&controller.form().category)?,
            };
            if let Some(label) = label {
                let value = find_category(&label)
                    .map(|category| category.label.to_string())
                    .unwrap_or(label);
                controller.set_field(FieldKey::Category, value)?;
            }
            Outcome::rerender()
        }
        Command::Location(query) => {
            let location = match query {
                Some(query) => match find_country(&query) {
                    Some(country) => Some(country.clone()),
                    None => {
                        return Err(CommandError::InvalidArguments(format!(
                            "No country matches `{query}`"
                        )))
                    }
                },
                None => interaction.pick_location(controller.form().location.as_ref())?,
            };
            if location.is_some() {
                controller.set_field(FieldKey::Location, location)?;
            }
            Outcome::rerender()
        }
        Command::Counter(key, change) => {
            match change {
                CounterChange::Increment => controller.increment(key)?,
                CounterChange::Decrement => controller.decrement(key)?,
                CounterChange::Set(value) => controller.set_field(key, value)?,
            }
            Outcome::rerender()
        }
        Command::Image(src) => {
            controller.set_field(FieldKey::ImageSrc, src)?;
            Outcome::rerender()
        }
        Command::Title(title) => {
            controller.set_field(FieldKey::Title, title)?;
            Outcome::rerender()
        }
        Command::Description(description) => {
            controller.set_field(FieldKey::Description, description)?;
            Outcome::rerender()
        }
        Command::Price(price) => {
            controller.set_field(FieldKey::Price, price)?;
            Outcome::rerender()
        }
        Command::Show => Outcome::rerender(),
        Command::Errors => Outcome {
            show_errors: true,
            ..Outcome::default()
        },
        Command::Help => Outcome::default().push(Feedback::Info(help_text())),
        Command::Exit => Outcome {
            exit: true,
            ..Outcome::default()
        },
    };
    Ok(outcome)
}

fn requires_open(command: &Command) -> bool {
    !matches!(
        command,
        Command::Open | Command::Help | Command::Exit | Command::Show
    )
}

fn handle_effect(
    effect: Option<Effect>,
    controller: &mut StepWizardController,
    submitter: &mut dyn SubmissionHandler,
) -> Result<Outcome, CommandError> {
    let outcome = match effect {
        None => Outcome::rerender(),
        Some(Effect::Closed) => {
            Outcome::rerender().push(Feedback::Info("Listing discarded.".into()))
        }
        Some(Effect::Invalid(errors)) => {
            let mut outcome = Outcome::rerender();
            for (key, error) in errors {
                outcome = outcome.push(Feedback::Warning(format!("{}: {}", key.label(), error)));
            }
            outcome
        }
        Some(Effect::Rejected(err)) => return Err(err.into()),
        Some(Effect::Submit(draft)) => match controller.complete_submission(&draft, submitter) {
            Ok(receipt) => {
                let mut outcome =
                    Outcome::default().push(Feedback::Success("Listing Created!".into()));
                if let Some(path) = receipt.location {
                    outcome = outcome.push(Feedback::Info(format!(
                        "Saved listing {} to {}",
                        receipt.listing_id,
                        path.display()
                    )));
                }
                outcome
            }
            Err(err) => Outcome::rerender()
                .push(Feedback::Error("Something went wrong.".into()))
                .push(Feedback::Info(err.to_string())),
        },
    };
    Ok(outcome)
}

pub fn help_text() -> String {
    [
        "Commands:",
        "  open                     Start listing your home",
        "  close                    Discard the listing and close the wizard",
        "  next                     Continue (creates the listing on the last step)",
        "  back                     Return to the previous step",
        "  category [label]         Choose what best describes your place",
        "  location [country]       Choose where your place is located",
        "  guests|rooms|bathrooms <n|+|->",
        "  image <url>              Set the photo of your place",
        "  title <text>             Set the listing title",
        "  description <text>       Set the listing description",
        "  price <amount>           Set the nightly price",
        "  show                     Redraw the current step",
        "  errors                   List every validation error",
        "  help                     Show this help",
        "  exit                     Leave the shell",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Result;
    use crate::listing::{ListingDraft, Step};
    use crate::submission::SubmissionReceipt;
    use uuid::Uuid;

    fn tokens(line: &str) -> Vec<String> {
        shell_words::split(line).unwrap()
    }

    #[test]
    fn parses_counter_and_multiword_arguments() {
        assert_eq!(
            parse(&tokens("rooms +")).unwrap(),
            Command::Counter(FieldKey::RoomCount, CounterChange::Increment)
        );
        assert_eq!(
            parse(&tokens("guests 4")).unwrap(),
            Command::Counter(FieldKey::GuestCount, CounterChange::Set(4))
        );
        assert_eq!(
            parse(&tokens("title \"Sea view loft\"")).unwrap(),
            Command::Title("Sea view loft".into())
        );
        assert_eq!(parse(&tokens("price $120")).unwrap(), Command::Price(120));
        assert_eq!(parse(&tokens("category")).unwrap(), Command::Category(None));
    }

    #[test]
    fn unknown_command_suggests_closest_name() {
        let err = parse(&tokens("nxt")).unwrap_err();
        assert_eq!(err.to_string(), "Unknown command `nxt`. Did you mean `next`?");
    }

    #[test]
    fn category_without_argument_needs_interaction() {
        let mut controller = StepWizardController::default();
        controller.open();
        let mut submitter = |_: &ListingDraft| -> Result<SubmissionReceipt> {
            Ok(SubmissionReceipt {
                listing_id: Uuid::new_v4(),
                location: None,
            })
        };
        let err = apply(
            Command::Category(None),
            &mut controller,
            &mut submitter,
            &mut NoInteraction,
        )
        .unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));

        apply(
            Command::Category(Some("beach".into())),
            &mut controller,
            &mut submitter,
            &mut NoInteraction,
        )
        .unwrap();
        assert_eq!(controller.form().category, "Beach");
        assert_eq!(controller.step(), Step::Category);
    }

    #[test]
    fn commands_on_closed_wizard_only_warn() {
        let mut controller = StepWizardController::default();
        let mut submitter = |_: &ListingDraft| -> Result<SubmissionReceipt> {
            Err(WizardError::Submission("unused".into()))
        };
        let outcome = apply(
            Command::Next,
            &mut controller,
            &mut submitter,
            &mut NoInteraction,
        )
        .unwrap();
        assert!(matches!(outcome.feedback.as_slice(), [Feedback::Warning(_)]));
        assert!(!controller.is_open());
    }
}
