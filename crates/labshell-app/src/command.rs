//! Line commands read from stdin.

use thiserror::Error;

/// Which page signal a viewport command simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalSource {
    Resize,
    Orientation,
    VisualViewport,
    /// The breakpoint media query flipped.
    Media,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Change the viewport width and deliver a signal.
    Viewport { source: SignalSource, width: f64 },
    Toggle,
    /// End a divider drag at the given percentages.
    Drag { left: f64, right: f64 },
    /// Show a tool tab.
    Tab(String),
    /// Ask how a link in embedded content opens.
    Link(String),
    /// Re-read the lab config for new tools.
    Reload,
    Status,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{0}: missing argument")]
    MissingArgument(&'static str),

    #[error("{command}: not a number: {value}")]
    InvalidNumber {
        command: &'static str,
        value: String,
    },

    #[error("{0}: too many arguments")]
    TooManyArguments(&'static str),
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let command = match head.to_ascii_lowercase().as_str() {
            "resize" => viewport("resize", SignalSource::Resize, &mut words)?,
            "orientation" => viewport("orientation", SignalSource::Orientation, &mut words)?,
            "viewport" => viewport("viewport", SignalSource::VisualViewport, &mut words)?,
            "media" => viewport("media", SignalSource::Media, &mut words)?,
            "toggle" => Command::Toggle,
            "drag" => Command::Drag {
                left: number("drag", words.next())?,
                right: number("drag", words.next())?,
            },
            "tab" => Command::Tab(word("tab", words.next())?),
            "link" => Command::Link(word("link", words.next())?),
            "reload" => Command::Reload,
            "status" => Command::Status,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(head.to_string())),
        };
        if words.next().is_some() {
            return Err(CommandError::TooManyArguments(name_of(&command)));
        }
        Ok(command)
    }
}

fn viewport<'a>(
    command: &'static str,
    source: SignalSource,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Command, CommandError> {
    Ok(Command::Viewport {
        source,
        width: number(command, words.next())?,
    })
}

fn number(command: &'static str, word: Option<&str>) -> Result<f64, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument(command))?;
    word.parse().map_err(|_| CommandError::InvalidNumber {
        command,
        value: word.to_string(),
    })
}

fn word(command: &'static str, word: Option<&str>) -> Result<String, CommandError> {
    word.map(str::to_string)
        .ok_or(CommandError::MissingArgument(command))
}

fn name_of(command: &Command) -> &'static str {
    match command {
        Command::Viewport { source, .. } => match source {
            SignalSource::Resize => "resize",
            SignalSource::Orientation => "orientation",
            SignalSource::VisualViewport => "viewport",
            SignalSource::Media => "media",
        },
        Command::Toggle => "toggle",
        Command::Drag { .. } => "drag",
        Command::Tab(_) => "tab",
        Command::Link(_) => "link",
        Command::Reload => "reload",
        Command::Status => "status",
        Command::Quit => "quit",
    }
}
