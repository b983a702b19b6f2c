use std::sync::Arc;
use std::time::Duration;

use piano_api::{ApiClient, Generation, Generations, Latest};
use piano_auth::SessionContext;
use piano_core::responses::DashboardStats;
use piano_i18n::Translator;
use serde::Serialize;
use tokio::sync::mpsc;

use crate::cli::root_commands::DashboardArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DashboardRow {
    metric: String,
    count: usize,
}

/// Handle `piano dashboard`.
pub async fn handle(
    args: &DashboardArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match args.watch {
        None => {
            let stats = ctx.api.dashboard_stats(&ctx.session).await;
            print_stats(&stats, &ctx.translator, flags.format)
        }
        Some(0) => anyhow::bail!("--watch interval must be at least 1 second"),
        Some(secs) => watch(Duration::from_secs(secs), ctx, flags).await,
    }
}

/// Refresh on a fixed interval until Ctrl-C. Refreshes run concurrently; a
/// refresh that finishes after a newer one is dropped.
async fn watch(interval: Duration, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sweeper = ctx
        .config
        .cache
        .sweep_interval()
        .and_then(|every| ctx.api.spawn_cache_sweeper(every));

    let generations = Generations::new();
    let mut latest = Latest::<DashboardStats>::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<(Generation, DashboardStats)>();

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let result = loop {
        tokio::select! {
            _ = ticker.tick() => {
                spawn_refresh(
                    generations.begin(),
                    Arc::clone(&ctx.api),
                    ctx.session.clone(),
                    tx.clone(),
                );
            }
            Some((generation, stats)) = rx.recv() => {
                if latest.apply(generation, stats)
                    && let Err(error) = print_stats(&stats, &ctx.translator, flags.format)
                {
                    break Err(error);
                }
            }
            signal = &mut ctrl_c => {
                if let Err(error) = signal {
                    tracing::warn!(%error, "failed to listen for ctrl-c");
                }
                break Ok(());
            }
        }
    };

    if let Some(handle) = sweeper {
        handle.abort();
    }
    result
}

fn spawn_refresh(
    generation: Generation,
    api: Arc<ApiClient>,
    session: SessionContext,
    tx: mpsc::UnboundedSender<(Generation, DashboardStats)>,
) {
    tokio::spawn(async move {
        let stats = api.refresh_dashboard_stats(&session).await;
        // Receiver gone means the watch loop has exited.
        let _ = tx.send((generation, stats));
    });
}

fn print_stats(
    stats: &DashboardStats,
    translator: &Translator,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => output(&rows(stats, translator), format),
        OutputFormat::Json | OutputFormat::Raw => output(stats, format),
    }
}

fn rows(stats: &DashboardStats, translator: &Translator) -> Vec<DashboardRow> {
    [
        ("dashboard.totalStudents", stats.total_students),
        ("dashboard.todaySchedule", stats.today_schedule),
        ("dashboard.recentLessons", stats.recent_lessons),
        ("dashboard.pendingHomework", stats.pending_homework),
    ]
    .into_iter()
    .map(|(key, count)| DashboardRow {
        metric: translator.t(key).to_string(),
        count,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use piano_i18n::{Bundle, Translator};
    use pretty_assertions::assert_eq;

    use super::*;

    fn translator(language: &str) -> Translator {
        Translator::new(
            Arc::new(Bundle::builtin()),
            language,
            vec!["en".to_string(), "zh".to_string()],
        )
        .expect("supported language")
    }

    #[test]
    fn rows_use_translated_labels() {
        let stats = DashboardStats {
            total_students: 3,
            today_schedule: 1,
            recent_lessons: 0,
            pending_homework: 2,
        };
        let rows = rows(&stats, &translator("en"));
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].metric, "Total Students");
        assert_eq!(rows[0].count, 3);
        assert_eq!(rows[3].metric, "Pending Homework");
        assert_eq!(rows[3].count, 2);
    }

    #[test]
    fn rows_follow_active_language() {
        let rows = rows(&DashboardStats::default(), &translator("zh"));
        assert_ne!(rows[0].metric, "Total Students");
        assert_ne!(rows[0].metric, "dashboard.totalStudents");
    }
}
