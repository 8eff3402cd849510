//! Plain-text rendering of feed events and team status.

use chrono::{DateTime, Utc};

use devteam_core::api::TeamStatus;
use devteam_core::feed::{ActivityEvent, ActivityKind, FeedStats};
use devteam_core::models::{Model, Provider};

/// Marker printed in front of an event
pub fn icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Start => "🚀",
        ActivityKind::Complete => "✅",
        ActivityKind::Progress => "⚡",
        ActivityKind::Error => "❌",
        ActivityKind::Info => "💡",
        ActivityKind::Testing => "🧪",
        ActivityKind::Deploy => "🚢",
        ActivityKind::Debug => "🐛",
        ActivityKind::Review => "👀",
    }
}

/// One feed line: icon, worker, message and age
pub fn format_event(event: &ActivityEvent, now: DateTime<Utc>) -> String {
    format!(
        "{} {} {} ({})",
        icon(event.kind),
        event.worker_name,
        event.message,
        event.age(now)
    )
}

/// Multi-line team summary
pub fn format_status(status: &TeamStatus) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Team size: {}  active: {}  working: {}\n",
        status.team_size, status.active_workers, status.is_working
    ));
    if let Some(project) = &status.project {
        out.push_str(&format!("Project: {} ({})\n", project.path, project.description));
    }
    if let Some(c) = &status.classification {
        out.push_str(&format!(
            "Classification: {} / {} complexity / tech [{}]\n",
            c.project_type,
            c.complexity,
            c.technologies.join(", ")
        ));
    }
    for worker in &status.workers {
        let task = worker
            .focus
            .as_deref()
            .or(worker.current_task.as_deref())
            .unwrap_or("-");
        out.push_str(&format!(
            "  {:<9} {:<10} {:<7} {:>3.0}%  done {:>2}  left {:>2}  {} | {}\n",
            worker.name,
            worker.specialization.to_string(),
            worker.status.to_string(),
            worker.progress,
            worker.completed,
            worker.queue.len(),
            worker.model.name,
            task
        ));
    }
    out
}

/// One-line activity summary for the end of a run
pub fn format_feed_stats(stats: &FeedStats) -> String {
    format!(
        "Activity: {} events retained, {} in the last minute",
        stats.total, stats.recent
    )
}

/// Catalog listing grouped by provider
pub fn format_catalog(groups: &[(Provider, Vec<&'static Model>)]) -> String {
    let mut out = String::new();
    for (provider, models) in groups {
        out.push_str(&format!("{}\n", provider));
        for model in models {
            out.push_str(&format!(
                "  {:<18} {:<18} cost {:<6} speed {:<9} {}\n",
                model.id,
                model.name,
                model.cost.to_string(),
                model.speed.to_string(),
                model.description
            ));
        }
    }
    out
}
