//! Goal progress report

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::display::{format_bar, format_percentage, truncate};
use crate::metrics::GoalStatus;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Goal")]
    title: String,
    #[tabled(rename = "Saved")]
    progress: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    percentage: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Due")]
    due: String,
}

fn due_text(goal: &GoalStatus) -> String {
    if goal.progress.is_complete {
        return "Complete".to_string();
    }
    match goal.days_remaining {
        Some(days) if days < 0 => format!("{} days overdue", -days),
        Some(0) => "Due today".to_string(),
        Some(1) => "1 day left".to_string(),
        Some(days) => format!("{} days left", days),
        None => "No due date".to_string(),
    }
}

pub fn format_goals(goals: &[GoalStatus], symbol: &str) -> String {
    if goals.is_empty() {
        return "Goals\n  No goals yet.\n".to_string();
    }

    let rows: Vec<GoalRow> = goals
        .iter()
        .map(|goal| GoalRow {
            title: truncate(&goal.progress.title, 28),
            progress: goal.progress.progress.format_with_symbol(symbol),
            target: goal.progress.target.format_with_symbol(symbol),
            percentage: format_percentage(goal.progress.percentage),
            bar: format_bar(goal.progress.percentage.min(100.0), 100.0, 10),
            due: due_text(goal),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
        .to_string();

    format!("Goals\n{}\n", table)
}
