use sea_orm::ActiveEnum;

use crate::entity::users;

const HEADER: &str = "id,name,username,phone,job,step,createdAt\n";

fn escape(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\"").replace(['\r', '\n'], " "))
}

pub fn export_to_csv(users: &[users::Model]) -> String {
    let mut content = HEADER.to_string();

    for user in users {
        content.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            user.id,
            escape(&user.name),
            escape(user.username.as_deref().unwrap_or_default()),
            escape(&user.phone),
            escape(&user.job),
            user.step.to_value(),
            user.created_at.format("%Y-%m-%dT%H:%M:%S"),
        ));
    }

    content
}
