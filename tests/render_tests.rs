//! End-to-end rendering tests.
//!
//! These drive the public API the way the CLI does: build a sheet set,
//! hand it to `Deck`, and assert on the finished HTML document.

use proxydeck::settings::SETTINGS_SHEET_NAME;
use proxydeck::sheet::{Cell, CellValue, Grid, SheetSet};
use proxydeck::{Deck, DeckOptions};

fn cell(v: impl Into<CellValue>) -> Cell {
    Some(v.into())
}

/// The reference workbook: one data sheet plus a settings sheet marking
/// `Text` as a rich field.
fn reference_sheets() -> SheetSet {
    let units: Grid = vec![
        vec![cell("Name"), cell("Text"), cell("Traits"), cell("Copies")],
        vec![
            cell("Goblin"),
            cell("Attacks. \\n Twice."),
            cell("Weak, Green"),
            cell(2i64),
        ],
    ];
    let settings: Grid = vec![vec![cell("RichFields")], vec![cell("Text")]];
    SheetSet::new(vec![
        ("Units".to_string(), units),
        (SETTINGS_SHEET_NAME.to_string(), settings),
    ])
}

/// Two copies of the card, a line break where the literal `\n` was, and
/// two separately colored trait tags.
#[test]
fn test_reference_workbook_renders_two_copies() {
    let deck = Deck::from_sheets(&reference_sheets(), DeckOptions::new()).unwrap();
    let html = deck.render_html();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.ends_with("</body></html>"));

    // Copies = 2 duplicates the whole fragment.
    assert_eq!(html.matches("<div class='units card'>").count(), 2);
    assert_eq!(html.matches("<div class='title_area'>").count(), 2);

    // The literal backslash-n became a line break inside the text box.
    assert!(html.contains("Attacks. <br />\n Twice."));
    assert!(!html.contains("\\n"));

    // Two trait tags, each with its own color rule in the head.
    assert_eq!(html.matches("<div class='traits_area field'>").count(), 2);
    assert!(html.contains("<span class='trait weak bigtext'>Weak</span>"));
    assert!(html.contains("<span class='trait green bigtext'>Green</span>"));
    let css = deck.trait_colors_css();
    assert!(css.contains(".trait.weak "));
    assert!(css.contains(".trait.green "));
}

/// Rendering the same sheets twice yields byte-identical documents.
#[test]
fn test_rendering_is_deterministic() {
    let render = || {
        Deck::from_sheets(&reference_sheets(), DeckOptions::new())
            .unwrap()
            .render_html()
    };
    assert_eq!(render(), render());
}

/// Markup characters in cells never reach the document raw, while a
/// literal `&nbsp;` entity survives escaping.
#[test]
fn test_cell_content_is_escaped() {
    let grid: Grid = vec![
        vec![cell("Name"), cell("Text")],
        vec![
            cell("<script>alert('x')</script>"),
            cell("Gap&nbsp;here & \"quotes\""),
        ],
    ];
    let deck = Deck::from_sheets(&SheetSet::single(grid), DeckOptions::new()).unwrap();
    let html = deck.render_html();

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("Gap&nbsp;here &amp; &quot;quotes&quot;"));
}

/// An explicit copyright argument beats the settings sheet, which beats
/// the built-in empty default.
#[test]
fn test_copyright_precedence_through_pipeline() {
    let sheets = |copyright_cell: Cell| {
        SheetSet::new(vec![
            (
                "Units".to_string(),
                vec![vec![cell("Name")], vec![cell("Goblin")]],
            ),
            (
                SETTINGS_SHEET_NAME.to_string(),
                vec![vec![cell("Copyright")], vec![copyright_cell]],
            ),
        ])
    };

    let from_arg = Deck::from_sheets(
        &sheets(cell("Sheet Owner")),
        DeckOptions::new().with_copyright("Arg Owner"),
    )
    .unwrap();
    assert!(from_arg.render_html().contains("©Arg Owner "));

    let from_sheet = Deck::from_sheets(&sheets(cell("Sheet Owner")), DeckOptions::new()).unwrap();
    assert!(from_sheet.render_html().contains("©Sheet Owner "));

    let from_default = Deck::from_sheets(&sheets(None), DeckOptions::new()).unwrap();
    assert!(from_default.render_html().contains("© "));
}

/// Substitution rules configured in the settings sheet rewrite rich
/// fields only, in sheet order.
#[test]
fn test_substitution_rules_apply_to_rich_fields() {
    let units: Grid = vec![
        vec![cell("Name"), cell("Text"), cell("Cost")],
        vec![cell("Goblin"), cell("Pay {gold} now"), cell("{gold}")],
    ];
    let settings: Grid = vec![
        vec![
            cell("RichFields"),
            cell("ProcessPatterns"),
            cell("ProcessReplacements"),
        ],
        vec![
            cell("Text"),
            cell(r"\{gold\}"),
            cell("<span class='icon gold'></span>"),
        ],
    ];
    let sheets = SheetSet::new(vec![
        ("Units".to_string(), units),
        (SETTINGS_SHEET_NAME.to_string(), settings),
    ]);

    let html = Deck::from_sheets(&sheets, DeckOptions::new())
        .unwrap()
        .render_html();

    // Rich field rewritten; the plain Cost field keeps the escaped text.
    assert!(html.contains("Pay <span class='icon gold'></span> now"));
    assert!(html.contains("{gold}"));
}

/// Version filtering keeps exact stringified matches only, including
/// numeric versions that arrive as whole floats.
#[test]
fn test_version_filter_end_to_end() {
    let units: Grid = vec![
        vec![cell("Name"), cell("Version")],
        vec![cell("Current"), cell(2.0f64)],
        vec![cell("Point"), cell("2.1")],
        vec![cell("Unversioned"), None],
    ];
    let sheets = SheetSet::new(vec![("Units".to_string(), units)]);

    let html = Deck::from_sheets(&sheets, DeckOptions::new().with_version_filter("2"))
        .unwrap()
        .render_html();

    assert!(html.contains("Current"));
    assert!(html.contains("(v2) "));
    assert!(!html.contains("Point"));
    assert!(!html.contains("Unversioned"));
}

/// A bare CSV file loads as the single-sheet case: cards render without
/// a cardtype banner.
#[test]
fn test_csv_input_end_to_end() {
    let mut path = std::env::temp_dir();
    path.push("proxydeck_render_test.csv");
    std::fs::write(&path, "Name,Text\nGoblin,Attacks twice.\n").unwrap();

    let deck = Deck::from_path(&path, DeckOptions::new()).unwrap();
    std::fs::remove_file(&path).ok();

    let html = deck.render_html();
    assert!(html.contains("Goblin"));
    assert!(html.contains("Attacks twice."));
    assert!(!html.contains("cardtype_area"));
}
