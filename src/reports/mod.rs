use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pachislot::reel::accounting;
use pachislot::reel::{MedalSummary, OutcomeCounts, Paytable, ProbabilityTable};
use pachislot::simulation::RateEstimate;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, from: usize, to: usize) {
    for i in from..=to {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn percent(rate: Option<f64>, decimals: usize) -> String {
    match rate {
        Some(r) => format!("{:.*}%", decimals, r * 100.0),
        None => "n/a".to_string(),
    }
}

fn one_in(p: f64) -> String {
    if p > 0.0 {
        format!("1/{:.1}", 1.0 / p)
    } else {
        "-".to_string()
    }
}

pub fn print_counts_report(counts: &OutcomeCounts, summary: &MedalSummary) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Outcome").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Share"),
        Cell::new("Observed"),
    ]);

    let total = counts.total();
    for (outcome, n) in counts.iter() {
        let share = if total > 0 {
            n as f64 / total as f64
        } else {
            0.0
        };
        let name = Cell::new(outcome.to_string());
        let name = if outcome.is_bonus() {
            name.fg(Color::Red)
        } else {
            name
        };
        table.add_row(vec![
            name,
            Cell::new(n),
            Cell::new(format!("{:.3}%", share * 100.0)),
            Cell::new(one_in(share)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(summary.spins).add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
    ]);
    align_right(&mut table, 1, 3);
    println!("\n{}", table);
}

/// Medals in, medals out, net and rate, one per line.
pub fn print_medal_summary(summary: &MedalSummary) {
    println!("Medals In: {}", summary.medals_in);
    println!("Medals Out: {}", summary.medals_out);
    println!("Net: {:+}", summary.net());
    println!("Rate: {}", percent(summary.rate(), 2));
}

pub fn print_rate_report(estimates: &[RateEstimate]) {
    let Some(first) = estimates.first() else {
        return;
    };

    println!(
        "\n=== 📈 機械割 {} ({} spins x {} trials) ===",
        first.machine, first.spins_per_trial, first.trials
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Setting").add_attribute(Attribute::Bold),
        Cell::new("Rate").fg(Color::Cyan),
        Cell::new("StdDev"),
        Cell::new("Min"),
        Cell::new("Max"),
        Cell::new("Theory").fg(Color::Green),
        Cell::new("Net Medals"),
    ]);

    for e in estimates {
        table.add_row(vec![
            Cell::new(e.setting).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}%", e.mean_rate * 100.0)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", e.std_dev * 100.0)),
            Cell::new(format!("{:.1}%", e.min_rate * 100.0)),
            Cell::new(format!("{:.1}%", e.max_rate * 100.0)),
            Cell::new(percent(e.theoretical_rate, 1)).fg(Color::Green),
            Cell::new(format!("{:+}", e.totals.net())),
        ]);
    }
    align_right(&mut table, 1, 6);
    println!("{}", table);

    for e in estimates {
        println!(
            "設定:{}, 機械割({}回転x{}回平均):{:.1}%",
            e.setting,
            e.spins_per_trial,
            e.trials,
            e.mean_rate * 100.0
        );
    }
}

pub fn print_probability_table(
    machine: &str,
    setting: usize,
    probs: &ProbabilityTable,
    paytable: &Paytable,
) {
    println!("\nTable: {} 設定{}", machine, setting);
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Outcome").add_attribute(Attribute::Bold),
        Cell::new("Probability"),
        Cell::new("Odds"),
        Cell::new("Payout"),
    ]);
    for (outcome, p) in probs.iter() {
        table.add_row(vec![
            Cell::new(outcome.to_string()),
            Cell::new(format!("{:.6}", p)),
            Cell::new(one_in(p)),
            Cell::new(paytable.payout(outcome)),
        ]);
    }
    align_right(&mut table, 1, 3);
    println!("{}", table);
    println!(
        "Theoretical Rate: {}",
        percent(accounting::theoretical_rate(probs, paytable), 2)
    );
}
