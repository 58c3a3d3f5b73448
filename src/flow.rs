use teloxide::utils::command::BotCommands;

use crate::entity::users::{self, Step};
use crate::qr::artifact_text;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "start the registration from the beginning.")]
    Start,
}

pub const RESTART_COMMAND: &str = "/start";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Restart,
    Text(String),
    Empty,
}

impl Input {
    pub fn parse(text: Option<&str>) -> Self {
        let text = text.map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Input::Empty;
        }

        // "/start", "/start@SomeBot" and "/start <payload>" all restart.
        let command = text.split_whitespace().next().unwrap_or_default();
        let command = command.split('@').next().unwrap_or_default();
        if command == RESTART_COMMAND {
            return Input::Restart;
        }

        Input::Text(text.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    None,
    Reset,
    SetName(String),
    SetPhone(String),
    SetJob(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    AskName,
    AskPhone,
    AskJob,
    Completed { artifact: String },
    AlreadyDone,
    TextRequired,
    ServerError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: Step,
    pub mutation: Mutation,
    pub reply: Reply,
}

impl Transition {
    fn stay(user: &users::Model, reply: Reply) -> Self {
        Transition {
            next: user.step,
            mutation: Mutation::None,
            reply,
        }
    }

    pub fn changes_record(&self) -> bool {
        self.mutation != Mutation::None
    }
}

pub fn transition(user: &users::Model, input: Input) -> Transition {
    let text = match input {
        Input::Restart => {
            return Transition {
                next: Step::AskName,
                mutation: Mutation::Reset,
                reply: Reply::AskName,
            }
        }
        Input::Empty => return Transition::stay(user, Reply::TextRequired),
        Input::Text(text) => text,
    };

    match user.step {
        Step::AskName => Transition {
            next: Step::AskPhone,
            mutation: Mutation::SetName(text),
            reply: Reply::AskPhone,
        },
        Step::AskPhone => Transition {
            next: Step::AskJob,
            mutation: Mutation::SetPhone(text),
            reply: Reply::AskJob,
        },
        Step::AskJob => Transition {
            next: Step::Done,
            reply: Reply::Completed {
                artifact: artifact_text(&user.name, &user.phone),
            },
            mutation: Mutation::SetJob(text),
        },
        Step::Done => Transition::stay(user, Reply::AlreadyDone),
    }
}
