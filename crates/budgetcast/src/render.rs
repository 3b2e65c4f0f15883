//! Output rendering
//!
//! JSON output is the report structures serialized as-is. Text output is a
//! plain table with amounts rounded to cents.

use std::fmt::Write;

use budgetcast_core::{AccountForecastReport, GlobalForecastReport};
use rust_decimal::Decimal;

use crate::cli::OutputFormat;
use crate::commands::{
    AccountSummary, InitReport, MovementSummary, OccurrencesReport, Output, RecentReport,
};
use crate::error::CliResult;

pub fn render(output: &Output, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
        OutputFormat::Text => Ok(render_text(output)),
    }
}

fn render_text(output: &Output) -> String {
    match output {
        Output::Account(report) => account_text(report),
        Output::Global(report) => global_text(report),
        Output::Occurrences(report) => occurrences_text(report),
        Output::Recent(report) => recent_text(report),
        Output::Movements(movements) => movements_text(movements),
        Output::Accounts(accounts) => accounts_text(accounts),
        Output::Initialized(report) => init_text(report),
    }
}

fn money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

// `write!` into a String cannot fail
fn account_text(report: &AccountForecastReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Account {} forecast to {}",
        report.account_id, report.target_date
    );
    let _ = writeln!(out, "Balance: {}", money(report.balance));

    if report.monthly_breakdown.is_empty() {
        let _ = writeln!(out, "\nNo months to forecast (target precedes account creation)");
        return out;
    }

    let _ = writeln!(
        out,
        "\n{:<8} {:>14} {:>14} {:>14} {:>12} {:>14}",
        "Month", "Incomes", "Expenses", "Net", "Interest", "Balance"
    );
    for (month, summary) in &report.monthly_breakdown {
        let _ = writeln!(
            out,
            "{:<8} {:>14} {:>14} {:>14} {:>12} {:>14}",
            month.to_string(),
            money(summary.incomes),
            money(summary.expenses),
            money(summary.net_flow()),
            money(summary.interest_net),
            money(summary.balance)
        );
    }
    out
}

fn global_text(report: &GlobalForecastReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Global forecast to {}", report.target_date);
    let _ = writeln!(out, "\n{:>4}  {:<24} {:<12} {:>14}", "Id", "Name", "Type", "Balance");
    for item in &report.accounts {
        let _ = writeln!(
            out,
            "{:>4}  {:<24} {:<12} {:>14}",
            item.id.to_string(),
            item.name,
            item.account_type.as_deref().unwrap_or("-"),
            money(item.balance)
        );
    }
    let _ = writeln!(out, "\nTotal: {}", money(report.total_balance));

    for failure in &report.failures {
        let _ = writeln!(
            out,
            "Skipped account {}: {}",
            failure.account_id, failure.reason
        );
    }
    out
}

fn occurrences_text(report: &OccurrencesReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (account {}, movement {}) until {}",
        report.movement_name, report.account_id, report.movement_id, report.until
    );

    if report.occurrences.is_empty() {
        let _ = writeln!(out, "No occurrences");
        return out;
    }

    for o in &report.occurrences {
        let marker = if o.overridden { " *" } else { "" };
        let _ = writeln!(
            out,
            "{:<8} {:<8} {:>14}{marker}",
            o.month.to_string(),
            o.kind.as_str(),
            money(o.amount)
        );
    }
    if report.occurrences.iter().any(|o| o.overridden) {
        let _ = writeln!(out, "\n* amount set by an exception");
    }
    out
}

fn recent_text(report: &RecentReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Recent activity until {}", report.until);

    if report.entries.is_empty() {
        let _ = writeln!(out, "No occurrences");
        return out;
    }

    for e in &report.entries {
        let marker = if e.overridden { " *" } else { "" };
        let _ = writeln!(
            out,
            "{:<8} {:<16} {:<24} {:<8} {:>14}{marker}",
            e.month.to_string(),
            e.account_name,
            e.movement_name,
            e.kind.as_str(),
            money(e.amount)
        );
    }
    out
}

fn movements_text(movements: &[MovementSummary]) -> String {
    let mut out = String::new();
    if movements.is_empty() {
        let _ = writeln!(out, "No movements");
        return out;
    }

    let _ = writeln!(
        out,
        "{:>4}  {:<16} {:<24} {:<8} {:>14}  {:<12}",
        "Id", "Account", "Name", "Type", "Amount", "Starts"
    );
    for m in movements {
        let _ = writeln!(
            out,
            "{:>4}  {:<16} {:<24} {:<8} {:>14}  {:<12}",
            m.id.to_string(),
            m.account_name,
            m.name,
            m.kind.as_str(),
            money(m.amount),
            m.start_date.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
        );
    }
    out
}

fn accounts_text(accounts: &[AccountSummary]) -> String {
    let mut out = String::new();
    if accounts.is_empty() {
        let _ = writeln!(out, "No accounts");
        return out;
    }

    let _ = writeln!(
        out,
        "{:>4}  {:<24} {:<12} {:<10} {:>9}",
        "Id", "Name", "Type", "Created", "Movements"
    );
    for a in accounts {
        let _ = writeln!(
            out,
            "{:>4}  {:<24} {:<12} {:<10} {:>9}",
            a.id.to_string(),
            a.name,
            a.account_type.as_deref().unwrap_or("-"),
            a.created_at.to_string(),
            a.movements
        );
    }
    out
}

fn init_text(report: &InitReport) -> String {
    format!(
        "Wrote starter ledger with {} accounts to {}\n",
        report.accounts,
        report.ledger_path.display()
    )
}
