use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{build_report, default_name};
use crate::db::open_store;
use crate::errors::AppResult;
use crate::models::report::Report;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_arrival, color_for_departure, color_for_hours};
use crate::utils::formatting::{bold, format_hours, time_or_dash};
use crate::utils::table::{Cell, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { name } = cmd {
        let store = open_store(cfg)?;
        let records = store.load_or_empty()?;

        let Some(selected) = name.clone().or_else(|| default_name(&records)) else {
            println!("No trainees recorded yet.");
            return Ok(());
        };

        let report = build_report(&records, &selected)?;
        print_report(&report, cfg);
    }
    Ok(())
}

fn print_report(report: &Report, cfg: &Config) {
    header(format!("Report for {}", report.name));

    if report.is_empty() {
        println!("No records for {}.", report.name);
    } else {
        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let mut table = Table::new(
            &["Date", "Time In", "Status In", "Time Out", "Status Out", "Hours"],
            sep,
        );

        for row in &report.rows {
            table.add_row(vec![
                Cell::plain(row.date.as_str()),
                Cell::plain(time_or_dash(row.time_in.as_deref())),
                Cell::colored(row.status_in.label(), color_for_arrival(row.status_in)),
                Cell::plain(time_or_dash(row.time_out.as_deref())),
                Cell::colored(row.status_out.label(), color_for_departure(row.status_out)),
                Cell::colored(format_hours(row.hours_worked), color_for_hours(row.hours_worked)),
            ]);
        }

        print!("{}", table.render());
    }

    println!("\n{} {}", bold("Total:"), format_hours(report.total_hours));
}
