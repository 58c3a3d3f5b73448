use tera::{Context, Tera};

use crate::flow::Reply;

const TEMPLATES: [(&str, &str); 7] = [
    ("ask_name.txt", include_str!("../templates/ask_name.txt")),
    ("ask_phone.txt", include_str!("../templates/ask_phone.txt")),
    ("ask_job.txt", include_str!("../templates/ask_job.txt")),
    ("completed.txt", include_str!("../templates/completed.txt")),
    ("already_done.txt", include_str!("../templates/already_done.txt")),
    ("text_required.txt", include_str!("../templates/text_required.txt")),
    ("server_error.txt", include_str!("../templates/server_error.txt")),
];

pub struct Replies {
    tera: Tera,
}

impl Replies {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Replies { tera })
    }

    pub fn render(&self, reply: &Reply) -> Result<String, tera::Error> {
        let mut context = Context::new();
        let template = match reply {
            Reply::AskName => "ask_name.txt",
            Reply::AskPhone => "ask_phone.txt",
            Reply::AskJob => "ask_job.txt",
            Reply::Completed { artifact } => {
                context.insert("artifact", artifact);
                "completed.txt"
            }
            Reply::AlreadyDone => "already_done.txt",
            Reply::TextRequired => "text_required.txt",
            Reply::ServerError => "server_error.txt",
        };
        self.tera.render(template, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_reply() {
        let replies = Replies::new().unwrap();
        for reply in [
            Reply::AskName,
            Reply::AskPhone,
            Reply::AskJob,
            Reply::AlreadyDone,
            Reply::TextRequired,
            Reply::ServerError,
        ] {
            assert!(!replies.render(&reply).unwrap().is_empty());
        }
    }

    #[test]
    fn completion_caption_repeats_artifact_verbatim() {
        let replies = Replies::new().unwrap();
        let caption = replies
            .render(&Reply::Completed {
                artifact: "O'g'il <Ali> | +998901234567".to_owned(),
            })
            .unwrap();
        assert!(caption.ends_with("O'g'il <Ali> | +998901234567"));
    }

    #[test]
    fn already_done_mentions_restart_command() {
        let replies = Replies::new().unwrap();
        let text = replies.render(&Reply::AlreadyDone).unwrap();
        assert!(text.contains(crate::flow::RESTART_COMMAND));
    }
}
