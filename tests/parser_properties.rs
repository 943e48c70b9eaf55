use proptest::prelude::*;

use ode_bridge::output::{parse, parse_with_report, render_csv};
use ode_bridge::types::SampleSeries;

#[derive(Debug, Clone)]
enum Line {
    Good(f64, f64),
    Bad(String),
}

fn finite() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0e6..1.0e6f64, Just(0.0), Just(-0.0), 1.0e-12..1.0e-6f64]
}

fn bad_line() -> impl Strategy<Value = String> {
    prop_oneof![
        // Wrong field counts.
        finite().prop_map(|v| format!("{v}")),
        (finite(), finite(), finite()).prop_map(|(a, b, c)| format!("{a},{b},{c}")),
        // Non-numeric fields.
        "[qxz]{1,6},[qxz]{1,6}",
        finite().prop_map(|v| format!("{v},x")),
        finite().prop_map(|v| format!("{v},")),
        Just(",".to_string()),
        Just("t,y,extra".to_string()),
    ]
}

fn line() -> impl Strategy<Value = Line> {
    prop_oneof![
        (finite(), finite()).prop_map(|(t, y)| Line::Good(t, y)),
        bad_line().prop_map(Line::Bad),
    ]
}

proptest! {
    #[test]
    fn keeps_exactly_the_well_formed_lines(lines in proptest::collection::vec(line(), 0..40)) {
        let mut text = String::from("t,y\n");
        let mut expected = SampleSeries::new();
        let mut bad = 0usize;

        for l in &lines {
            match l {
                Line::Good(t, y) => {
                    text.push_str(&format!("{t},{y}\n"));
                    expected.push(*t, *y);
                }
                Line::Bad(s) => {
                    text.push_str(s);
                    text.push('\n');
                    bad += 1;
                }
            }
        }

        let report = parse_with_report(&text);
        prop_assert_eq!(report.series.len(), expected.len());
        prop_assert_eq!(report.dropped, bad);
        prop_assert_eq!(report.series, expected);
    }

    #[test]
    fn rendered_series_parse_back(pairs in proptest::collection::vec((finite(), finite()), 0..30)) {
        let series: SampleSeries = pairs.into_iter().collect();
        prop_assert_eq!(parse(&render_csv(&series)), series);
    }
}

#[test]
fn documented_example_output() {
    let series = parse("t,y\n0.000000,1.000000\n1.000000,0.606531\n");
    assert_eq!(series.iter().collect::<Vec<_>>(), vec![(0.0, 1.0), (1.0, 0.606531)]);
}
