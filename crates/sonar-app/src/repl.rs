//! Interactive input loop.
//!
//! Each submission runs on its own task so the loop keeps reading input
//! while a request is in flight; queries typed meanwhile are dropped by
//! the session, and the clear command still takes effect.

use std::sync::Arc;

use sonar_config::schema::UiConfig;
use sonar_session::{SessionController, SubmitOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::input::{parse_line, InputAction};

/// Read lines until EOF or a quit command, driving `session`.
///
/// On EOF every outstanding submission is awaited so piped input still
/// gets its answer.
pub async fn run<R>(
    session: Arc<SessionController>,
    ui: &UiConfig,
    input: R,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut submissions: JoinSet<SubmitOutcome> = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line, ui) {
            InputAction::Skip => {}
            InputAction::Submit(query) => {
                let session = session.clone();
                submissions.spawn(async move { session.submit_query(&query).await });
                // Reap finished submissions so the set stays small.
                while submissions.try_join_next().is_some() {}
            }
            InputAction::Clear => session.clear_session(),
            InputAction::Quit => {
                info!("quit requested");
                return Ok(());
            }
            InputAction::Unknown(cmd) => debug!("ignoring unknown command {cmd}"),
        }
    }

    while let Some(joined) = submissions.join_next().await {
        if let Ok(outcome) = joined {
            debug!(?outcome, "submission settled");
        }
    }
    Ok(())
}
