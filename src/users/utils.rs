use chrono::Utc;
use sea_orm::{prelude::*, ActiveValue, QueryOrder, SqlErr};

use crate::entity::users::{self, Step};
use crate::flow::{Mutation, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Existing,
    Created,
    Recovered,
}

#[derive(Debug, Clone)]
pub struct Resolved {
    pub user: users::Model,
    pub origin: Origin,
}

impl Resolved {
    pub fn is_first_contact(&self) -> bool {
        self.origin != Origin::Existing
    }
}

pub fn select_user(telegram_id: i64) -> Select<users::Entity> {
    users::Entity::find().filter(users::Column::TelegramId.eq(telegram_id))
}

pub fn select_users(ids: &[i32]) -> Select<users::Entity> {
    users::Entity::find().filter(users::Column::Id.is_in(ids.iter().copied()))
}

pub fn select_all_users() -> Select<users::Entity> {
    users::Entity::find()
        .order_by_desc(users::Column::CreatedAt)
        .order_by_desc(users::Column::Id)
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

async fn create_user(
    connection: &DatabaseConnection,
    telegram_id: i64,
    username: Option<&str>,
) -> Result<users::Model, DbErr> {
    users::ActiveModel {
        telegram_id: ActiveValue::Set(telegram_id),
        username: ActiveValue::Set(username.map(str::to_owned)),
        name: ActiveValue::Set(String::new()),
        phone: ActiveValue::Set(String::new()),
        job: ActiveValue::Set(String::new()),
        step: ActiveValue::Set(Step::AskName),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(connection)
    .await
}

/// Finds the user for `telegram_id`, creating it when absent.
///
/// Lookup and insert are not atomic. When two events for a new account race,
/// the unique index on `telegram_id` rejects the second insert and the row
/// written by the winner is read back instead.
pub async fn resolve_user(
    connection: &DatabaseConnection,
    telegram_id: i64,
    username: Option<&str>,
) -> Result<Resolved, DbErr> {
    if let Some(user) = select_user(telegram_id).one(connection).await? {
        let user = refresh_username(connection, user, username).await;
        return Ok(Resolved {
            user,
            origin: Origin::Existing,
        });
    }

    match create_user(connection, telegram_id, username).await {
        Ok(user) => {
            log::info!("Created user {} for telegram id {}", user.id, telegram_id);
            Ok(Resolved {
                user,
                origin: Origin::Created,
            })
        }
        Err(err) if is_unique_violation(&err) => {
            log::debug!("Concurrent insert for telegram id {}, re-reading", telegram_id);
            let user = select_user(telegram_id).one(connection).await?.ok_or(err)?;
            let user = refresh_username(connection, user, username).await;
            Ok(Resolved {
                user,
                origin: Origin::Recovered,
            })
        }
        Err(err) => Err(err),
    }
}

pub async fn refresh_username(
    connection: &DatabaseConnection,
    user: users::Model,
    username: Option<&str>,
) -> users::Model {
    if user.username.as_deref() == username {
        return user;
    }

    let mut active: users::ActiveModel = user.clone().into();
    active.username = ActiveValue::Set(username.map(str::to_owned));
    match active.update(connection).await {
        Ok(updated) => updated,
        Err(err) => {
            log::warn!("Can't refresh username of user {}: {:?}", user.id, err);
            user
        }
    }
}

pub async fn apply_transition(
    connection: &DatabaseConnection,
    user: users::Model,
    transition: &Transition,
) -> Result<users::Model, DbErr> {
    if !transition.changes_record() {
        return Ok(user);
    }

    let mut active: users::ActiveModel = user.into();
    match &transition.mutation {
        Mutation::None => {}
        Mutation::Reset => {
            active.name = ActiveValue::Set(String::new());
            active.phone = ActiveValue::Set(String::new());
            active.job = ActiveValue::Set(String::new());
        }
        Mutation::SetName(name) => active.name = ActiveValue::Set(name.clone()),
        Mutation::SetPhone(phone) => active.phone = ActiveValue::Set(phone.clone()),
        Mutation::SetJob(job) => active.job = ActiveValue::Set(job.clone()),
    }
    active.step = ActiveValue::Set(transition.next);

    active.update(connection).await
}
