use durascan::diagnosis::{inspect, inspect_thickness};
use durascan::{score, BarStyle, Measurement, ScoreResult, Verdict};

fn bar_cells(line: &str, style: &BarStyle) -> (usize, usize) {
    let start = line.find('|').unwrap();
    let end = line.rfind('|').unwrap();
    let bar = &line[start + 1..end];
    let filled = bar.chars().filter(|c| *c == style.filled).count();
    let empty = bar.chars().filter(|c| *c == style.empty).count();
    (filled, empty)
}

fn percent(line: &str) -> &str {
    let tail = &line[line.rfind("| ").unwrap() + 2..];
    tail.strip_suffix('%').unwrap()
}

#[test]
fn bar_cells_always_fill_the_bar() {
    for style in [BarStyle::INLINE, BarStyle::STARTUP] {
        for total in 1..=120u64 {
            for current in 0..=total {
                let line = style.render(current, total, "Analyzing");
                let (filled, empty) = bar_cells(&line, &style);
                assert_eq!(filled + empty, style.bar_length);
                assert_eq!(filled as u64, style.bar_length as u64 * current / total);
                assert_eq!(
                    percent(&line),
                    format!("{:.1}", current as f64 / total as f64 * 100.0)
                );
            }
        }
    }
}

#[test]
fn complete_bar_is_full() {
    for total in [1, 20, 40, 50, 100] {
        let line = BarStyle::INLINE.render(total, total, "Done");
        assert!(line.ends_with("| 100.0%"));
        assert_eq!(bar_cells(&line, &BarStyle::INLINE), (25, 0));
    }
}

#[test]
fn fresh_bar_is_empty() {
    for total in [1, 20, 40, 50, 100] {
        let line = BarStyle::STARTUP.render(0, total, "Starting up...");
        assert!(line.ends_with("| 0.0%"));
        assert_eq!(bar_cells(&line, &BarStyle::STARTUP), (0, 50));
    }
}

#[test]
fn thin_light_bottle_is_low() {
    let result = score(1.5, 5.0);
    assert_eq!(
        result,
        ScoreResult {
            thickness_points: 1,
            weight_points: 1,
            total: 2
        }
    );
    assert_eq!(result.verdict(), Verdict::Low);
}

#[test]
fn thin_medium_weight_bottle_is_medium() {
    let result = score(1.5, 50.0);
    assert_eq!((result.thickness_points, result.weight_points, result.total), (1, 2, 3));
    assert_eq!(result.verdict(), Verdict::Medium);
}

#[test]
fn thick_heavy_bottle_is_highly_durable() {
    let result = score(3.5, 90.0);
    assert_eq!((result.thickness_points, result.weight_points, result.total), (3, 3, 6));
    assert_eq!(result.verdict().label(), "highly durable");
}

#[test]
fn boundary_readings() {
    let result = score(2.0, 10.0);
    assert_eq!((result.thickness_points, result.weight_points, result.total), (2, 1, 3));
    assert_eq!(result.verdict(), Verdict::Medium);
}

#[test]
fn weight_gap_resolves_to_lower_bucket() {
    let result = score(2.0, 10.5);
    assert_eq!((result.thickness_points, result.weight_points, result.total), (2, 1, 3));
    assert_eq!(score(2.0, 80.5).weight_points, 2);
}

#[test]
fn total_always_sums_points() {
    let readings = [-5.0, 0.0, 1.99, 2.0, 2.5, 3.0, 3.01, 10.0, 10.5, 11.0, 80.0, 80.5, 81.0, 500.0];
    for thickness in readings {
        for weight in readings {
            let result = score(thickness, weight);
            assert_eq!(result.total, result.thickness_points + result.weight_points);
            assert!((2..=6).contains(&result.total));
        }
    }
}

#[test]
fn problem_finder_reports_thickness() {
    assert!(inspect_thickness(&Measurement::new(1.0, 5.0)).problem);
    assert!(!inspect_thickness(&Measurement::new(4.0, 5.0)).problem);
}

#[test]
fn problem_finder_summary() {
    let lines: Vec<_> = inspect(&Measurement::new(1.0, 5.0))
        .iter()
        .map(|f| f.summary_line())
        .collect();
    assert_eq!(lines, ["LOW THICKNESS - Increase thickness", "LOW WEIGHT - Increase weight"]);
}
