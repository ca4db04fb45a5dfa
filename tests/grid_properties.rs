use gridlog::{grid, Cell, Grid, GridLog, GridOptions, Layout, PartialOptions};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::json;

fn quiet_log() -> GridLog {
    GridLog::with_options(GridOptions {
        emit_to_console: false,
        ..GridOptions::default()
    })
}

fn ragged_grid() -> Grid {
    Grid::from_rows(vec![
        vec![Cell::from("id"), Cell::from("payload")],
        vec![Cell::from(1), Cell::from(json!({"name": "alpha", "tags": ["x", "y"]}))],
        vec![Cell::from("only one cell")],
        vec![
            Cell::from(3),
            Cell::from("multi\r\nline"),
            Cell::from(None::<&str>),
        ],
        vec![],
    ])
}

#[test]
fn line_count_matches_row_heights() {
    let grid = ragged_grid();
    let layout = Layout::measure(&grid, 2).unwrap();
    let output = quiet_log().render(grid.clone()).unwrap().unwrap();

    let rows = layout.row_heights.len();
    let expected = 1 + layout.row_heights.iter().sum::<usize>() + (rows - 1) + 1;
    assert_eq!(output.lines().count(), expected);
}

#[test]
fn every_line_has_the_same_width() {
    for ascii in [false, true] {
        let log = quiet_log();
        log.apply_options(PartialOptions::default().use_ascii_borders(ascii).cell_padding(2));
        let output = log.render(ragged_grid()).unwrap().unwrap();

        let widths: Vec<usize> = output.lines().map(|line| line.chars().count()).collect();
        assert!(
            widths.iter().all(|w| *w == widths[0]),
            "grid is not rectangular: {widths:?}\n{output}"
        );
    }
}

#[test]
fn applying_same_options_is_idempotent() {
    let log = quiet_log();
    let overrides = PartialOptions::default().cell_padding(3).structured_indent(4);

    log.reset_options().apply_options(overrides.clone());
    let first = log.render(ragged_grid()).unwrap();
    log.apply_options(overrides);
    let second = log.render(ragged_grid()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn flat_row_equals_single_row_grid() {
    let log = quiet_log();
    assert_eq!(
        log.render(["a", "b"]).unwrap(),
        log.render([["a", "b"]]).unwrap()
    );
    assert_eq!(
        log.render(json!(["a", "b"])).unwrap(),
        log.render(json!([["a", "b"]])).unwrap()
    );
}

#[test]
fn ascii_mode_has_no_box_drawing() {
    let log = quiet_log();
    let output = log
        .apply_options(PartialOptions::default().use_ascii_borders(true))
        .render(ragged_grid())
        .unwrap()
        .unwrap();

    assert!(output.chars().all(|c| !('\u{2500}'..='\u{257f}').contains(&c)));
    assert!(output.starts_with("+-"));
}

#[test]
fn no_input_renders_nothing() {
    assert_eq!(quiet_log().render(grid![]).unwrap(), None);
    assert_eq!(GridLog::new().render(Vec::<Cell>::new()).unwrap(), None);
}

#[test]
fn renders_serializable_records() {
    #[derive(Serialize)]
    struct Service {
        name: &'static str,
        port: u16,
    }

    let rows = vec![
        vec![json!("web"), serde_json::to_value(Service { name: "nginx", port: 80 }).unwrap()],
        vec![json!("db"), json!(null)],
    ];
    let grid = Grid::from_serialize(&rows).unwrap();
    let output = quiet_log().render(grid).unwrap().unwrap();

    let expected = [
        "┌─────┬────────────────────┐",
        "│ web │ {                  │",
        "│     │   \"name\": \"nginx\", │",
        "│     │   \"port\": 80       │",
        "│     │ }                  │",
        "├─────┼────────────────────┤",
        "│ db  │ null               │",
        "└─────┴────────────────────┘",
    ]
    .join("\n");
    assert_eq!(output, expected);
}

#[test]
fn global_renderer_is_configurable() {
    let output = gridlog::reset_options()
        .apply_options(PartialOptions::default().emit_to_console(false).use_ascii_borders(true))
        .render(["x", "y"])
        .unwrap();
    assert_eq!(output.as_deref(), Some("+---+---+\n| x | y |\n+---+---+"));

    let output = gridlog::apply_options(PartialOptions::default().use_ascii_borders(false))
        .render(["x"])
        .unwrap();
    assert_eq!(output.as_deref(), Some("┌───┐\n│ x │\n└───┘"));

    assert_eq!(gridlog::render(grid![]).unwrap(), None);

    let defaults = gridlog::reset_options().options();
    assert_eq!(defaults, GridOptions::default());
}
