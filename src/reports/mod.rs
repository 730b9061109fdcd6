use antforge::baseline::Algorithm;
use antforge::colony::PheromoneMatrix;
use antforge::dataset::Dataset;
use antforge::distance::TourCost;
use antforge::tour::Tour;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::time::Duration;

// Wider matrices are summarized instead of drawn
const MATRIX_DISPLAY_LIMIT: usize = 16;

pub struct ComparisonRow {
    pub algorithm: Algorithm,
    pub cost: TourCost,
    pub elapsed: Duration,
}

pub fn print_matrix(matrix: &PheromoneMatrix) {
    let n = matrix.size();
    println!("\nPheromone Matrix ({}x{}, total {:.3})", n, n, matrix.total());
    if n > MATRIX_DISPLAY_LIMIT {
        println!("(too large to display)");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("from\\to").add_attribute(Attribute::Bold)];
    header.extend((0..n).map(|j| Cell::new(j).add_attribute(Attribute::Bold)));
    table.add_row(header);

    for i in 0..n {
        let mut row = vec![Cell::new(i).add_attribute(Attribute::Bold)];
        row.extend((0..n).map(|j| {
            Cell::new(format!("{:.3}", matrix.get(i, j))).set_alignment(CellAlignment::Right)
        }));
        table.add_row(row);
    }
    println!("{}", table);
}

pub fn print_tour(dataset: &Dataset, tour: &Tour, cost: &TourCost) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("City").add_attribute(Attribute::Bold),
        Cell::new("X"),
        Cell::new("Y"),
    ]);
    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (pos, &idx) in tour.order().iter().enumerate() {
        let c = dataset.city(idx);
        table.add_row(vec![
            Cell::new(pos),
            Cell::new(idx).fg(Color::Cyan),
            Cell::new(c.x),
            Cell::new(c.y),
        ]);
    }
    println!("\n{}", table);

    let route: Vec<String> = tour.order().iter().map(|i| i.to_string()).collect();
    println!("Route: {} -> {}", route.join(" -> "), tour.order()[0]);
    println!("Cost: {:.4}", cost.total());
}

pub fn print_comparison(rows: &[ComparisonRow]) {
    let Some(best) = rows
        .iter()
        .min_by(|a, b| a.cost.total().total_cmp(&b.cost.total()))
    else {
        return;
    };
    let best_cost = best.cost.total();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(format!("Comparison vs Best ({})", best.algorithm)).add_attribute(Attribute::Bold),
        Cell::new("Cost").fg(Color::Cyan),
        Cell::new("% Diff"),
        Cell::new("Time (ms)"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in rows {
        let cost = row.cost.total();
        let pct = if best_cost > 0.0 {
            ((cost - best_cost) / best_cost) * 100.0
        } else {
            0.0
        };

        let name_cell = if row.algorithm == best.algorithm {
            Cell::new(row.algorithm)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(row.algorithm).add_attribute(Attribute::Bold)
        };

        let cost_cell = if row.cost.overflowed() {
            Cell::new("overflow").fg(Color::Red)
        } else {
            Cell::new(format!("{:.2}", cost)).fg(Color::Cyan)
        };

        table.add_row(vec![
            name_cell,
            cost_cell,
            Cell::new(format!("{:.1}%", pct)),
            Cell::new(format!("{:.2}", row.elapsed.as_secs_f64() * 1000.0)),
        ]);
    }
    println!("\n{}", table);
}
