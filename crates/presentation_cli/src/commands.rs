//! Command execution

use std::sync::Arc;

use anyhow::{Context, bail};
use application::AgendaService;
use chrono::Local;
use domain::{
    CalendarTypeDraft, CalendarTypeUpdate, CalendarView, EventDraft, EventUpdate, GeoLocation,
    MAX_UPLOAD_BYTES, UserUpdate, fixtures,
};
use infrastructure::{AppConfig, CalendarApiAdapter, api_client};
use integration_calendar_api::{CalendarApiClient, EventQuery, FileUpload, LegacyApiClient};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::{
    cli::{Commands, EventsCommand, FilesCommand, LegacyCommand, TypesCommand, UserCommand},
    render::render_month,
};

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run one command against the configured backend
pub async fn run(command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    match command {
        Commands::Mock { date } => {
            let today = date.unwrap_or_else(|| Local::now().date_naive());
            print_json(&json!({
                "tasks": fixtures::mock_tasks(today),
                "reminders": fixtures::mock_reminders(),
            }))
        },
        Commands::Legacy(cmd) => run_legacy(cmd, config).await,
        command => {
            let client = api_client(config).context("creating API client")?;
            run_api(command, client).await
        },
    }
}

#[allow(clippy::too_many_lines)]
async fn run_api(command: Commands, client: CalendarApiClient) -> anyhow::Result<()> {
    match command {
        Commands::Login { account_id } => {
            let session = client.auth().login(&account_id).await?;
            if !client.has_access_token() {
                bail!(
                    "login failed: {}",
                    session.message.as_deref().unwrap_or("no token returned")
                );
            }
            let session = session.into_data("auth/login")?;
            info!(account_id = %session.user.account_id, "Signed in");
            print_json(&json!({
                "user": session.user,
                "is_new_user": session.is_new_user,
                "expires_in": session.expires_in,
            }))
        },
        Commands::Logout => {
            client.auth().logout().await?;
            println!("Signed out");
            Ok(())
        },
        Commands::Time => print_json(&client.time().server_time().await?),
        Commands::User(cmd) => run_user(cmd, &client).await,
        Commands::Types(cmd) => run_types(cmd, &client).await,
        Commands::Events(cmd) => run_events(cmd, &client).await,
        Commands::Files(cmd) => run_files(cmd, &client).await,
        Commands::Reminders { date } => print_json(&client.reminders().list(date).await?),
        Commands::Commute { from, to } => print_json(&client.commute().get(from, to).await?),
        Commands::Month {
            date,
            week_start,
            json,
        } => {
            let today = Local::now().date_naive();
            let view = CalendarView::new(date.unwrap_or(today)).with_week_start(week_start);
            let service = AgendaService::new(Arc::new(CalendarApiAdapter::new(Arc::new(client))));
            let agenda = service.month_agenda(&view, today).await?;
            if json {
                print_json(&agenda)
            } else {
                print!("{}", render_month(&agenda));
                Ok(())
            }
        },
        Commands::Mock { .. } | Commands::Legacy(_) => {
            bail!("command does not use the versioned API")
        },
    }
}

async fn run_user(cmd: UserCommand, client: &CalendarApiClient) -> anyhow::Result<()> {
    let user = client.user();
    match cmd {
        UserCommand::Show => print_json(&user.get().await?),
        UserCommand::Update { home, school } => {
            let update = UserUpdate {
                home_address: home,
                school_address: school,
            };
            print_json(&user.update(&update).await?)
        },
        UserCommand::Location => print_json(&user.location().await?),
        UserCommand::SetLocation {
            latitude,
            longitude,
            accuracy,
        } => {
            let position = GeoLocation::new(latitude, longitude)?;
            print_json(&user.update_location(position, accuracy).await?)
        },
    }
}

async fn run_types(cmd: TypesCommand, client: &CalendarApiClient) -> anyhow::Result<()> {
    let types = client.calendar_types();
    match cmd {
        TypesCommand::List => print_json(&types.list().await?),
        TypesCommand::Create { name, color } => {
            print_json(&types.create(&CalendarTypeDraft::new(name, color)).await?)
        },
        TypesCommand::Update {
            type_id,
            name,
            color,
        } => {
            let update = CalendarTypeUpdate { name, color };
            print_json(&types.update(&type_id, &update).await?)
        },
        TypesCommand::Show { type_id } => print_json(&types.set_visibility(&type_id, true).await?),
        TypesCommand::Hide { type_id } => print_json(&types.set_visibility(&type_id, false).await?),
        TypesCommand::Delete { type_id } => print_json(&types.delete(&type_id).await?),
    }
}

async fn run_events(cmd: EventsCommand, client: &CalendarApiClient) -> anyhow::Result<()> {
    let events = client.events();
    match cmd {
        EventsCommand::List {
            date,
            from,
            to,
            type_id,
            completed,
        } => {
            let query = EventQuery {
                date,
                start_date: from,
                end_date: to,
                type_id,
                completed,
            };
            print_json(&events.list(&query).await?)
        },
        EventsCommand::Get { id } => print_json(&events.get(id).await?),
        EventsCommand::Create {
            title,
            date,
            start,
            end,
            type_id,
            location,
            description,
            links,
            attachment,
        } => {
            let mut draft = match start {
                Some(start) => EventDraft::timed(title, date, start, end, type_id),
                None => EventDraft::all_day(title, date, type_id),
            };
            if let Some(location) = location {
                draft = draft.with_location(location);
            }
            if let Some(description) = description {
                draft = draft.with_description(description);
            }
            for link in links {
                draft = draft.with_link(link);
            }
            draft.attachment_id = attachment;
            print_json(&events.create(&draft).await?)
        },
        EventsCommand::Update {
            id,
            title,
            date,
            start,
            end,
            all_day,
            location,
            description,
            type_id,
            attachment,
            clear_attachment,
        } => {
            let mut update = EventUpdate {
                title,
                date,
                location,
                description,
                type_id,
                ..EventUpdate::default()
            };
            if all_day {
                update.is_all_day = Some(true);
                update.start_time = Some(None);
                update.end_time = Some(None);
            } else if start.is_some() || end.is_some() {
                update.is_all_day = Some(false);
                update.start_time = start.map(Some);
                update.end_time = end.map(Some);
            }
            if clear_attachment {
                update.attachment_id = Some(None);
            } else if attachment.is_some() {
                update.attachment_id = Some(attachment);
            }
            if update.is_empty() {
                bail!("nothing to update");
            }
            print_json(&events.update(id, &update).await?)
        },
        EventsCommand::Delete { id } => print_json(&events.delete(id).await?),
        EventsCommand::Complete { id, undo } => print_json(&events.set_completed(id, !undo).await?),
        EventsCommand::Link { id, url } => print_json(&events.add_link(id, &url).await?),
        EventsCommand::Unlink { id, url } => print_json(&events.remove_link(id, &url).await?),
    }
}

async fn run_files(cmd: FilesCommand, client: &CalendarApiClient) -> anyhow::Result<()> {
    match cmd {
        FilesCommand::Upload { path, mime_type } => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            let file_name = path
                .file_name()
                .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
            let mut upload = FileUpload::new(file_name, bytes);
            if let Some(mime_type) = mime_type {
                upload = upload.with_mime_type(mime_type);
            }
            if upload.exceeds_limit() {
                warn!(
                    file = %path.display(),
                    size = upload.bytes.len(),
                    limit = MAX_UPLOAD_BYTES,
                    "File exceeds the backend upload limit, expect FILE_TOO_LARGE"
                );
            }
            print_json(&client.files().upload(upload).await?)
        },
        FilesCommand::Delete { id } => print_json(&client.files().delete(id).await?),
    }
}

async fn run_legacy(cmd: LegacyCommand, config: &AppConfig) -> anyhow::Result<()> {
    let legacy = LegacyApiClient::new(&config.legacy).context("creating legacy API client")?;
    let value = match cmd {
        LegacyCommand::Events => legacy.get_events().await?,
        LegacyCommand::Types => legacy.get_calendar_types().await?,
        LegacyCommand::Reminders => legacy.get_reminders().await?,
    };
    print_json(&value)
}
