use lexihover_config::page::PageConfig;
use lexihover_config::popup::PopupConfig;
use lexihover_core::chain::PopupNode;
use lexihover_core::{Definition, DictionaryEntry, Example, Page, PopupRenderer, SelectionError};
use lexihover_types::{NodeId, Point, Rect};

use crate::page::{ReplayPage, wrap};

fn page(text: &str) -> ReplayPage {
    ReplayPage::new(text, PageConfig::default(), PopupConfig::default())
}

fn kat_popup(position: Point) -> PopupNode {
    PopupNode {
        anchor_word: "kat".to_string(),
        entries: vec![DictionaryEntry {
            title: "kat".to_string(),
            part_of_speech: "zn".to_string(),
            definitions: vec![Definition {
                text: "huisdier".to_string(),
                examples: Some(vec![Example {
                    original: "de kat slaapt".to_string(),
                    translation: Some("the cat sleeps".to_string()),
                }]),
            }],
        }],
        position,
    }
}

#[test]
fn test_hit_test_maps_points_to_char_offsets() {
    let page = page("de kat\nloopt");

    let hit = page.hit_test(Point::new(25.0, 5.0)).unwrap();
    assert_eq!(hit.node, NodeId(0));
    assert_eq!(hit.offset, 3);

    let hit = page.hit_test(Point::new(5.0, 20.0)).unwrap();
    assert_eq!(hit.node, NodeId(1));
    assert_eq!(hit.offset, 0);

    // Past the end of the line, and below the last line
    assert!(page.hit_test(Point::new(60.0, 5.0)).is_none());
    assert!(page.hit_test(Point::new(5.0, 40.0)).is_none());
}

#[test]
fn test_rect_of_is_bounds_checked() {
    let page = page("de kat");

    assert_eq!(
        page.rect_of(NodeId(0), 3, 6),
        Some(Rect::new(24.0, 0.0, 24.0, 16.0))
    );
    assert_eq!(page.rect_of(NodeId(0), 3, 9), None);
    assert_eq!(page.rect_of(NodeId(7), 0, 1), None);
}

#[test]
fn test_select_range() {
    let mut page = page("de kat");

    assert!(matches!(
        page.select_range(NodeId(0), 4, 9),
        Err(SelectionError::OutOfBounds { .. })
    ));
    assert!(matches!(
        page.select_range(NodeId(3), 0, 1),
        Err(SelectionError::UnknownNode(NodeId(3)))
    ));
    assert_eq!(page.selection(), None);

    page.select_range(NodeId(0), 3, 6).unwrap();
    assert_eq!(page.selection(), Some((NodeId(0), 3, 6)));
    assert_eq!(page.selected_text().as_deref(), Some("kat"));
}

#[test]
fn test_popup_text_layout() {
    let mut page = page("de kat loopt");
    page.show_popup(0, &kat_popup(Point::new(10.0, 20.0)));

    assert_eq!(page.popup_count(), 1);
    assert_eq!(
        page.popup_lines(0),
        vec!["kat (zn)", "1. huisdier", "  de kat slaapt (the cat sleeps)"]
    );
}

#[test]
fn test_popup_text_is_hit_testable() {
    let mut page = page("de kat loopt");
    page.show_popup(0, &kat_popup(Point::new(10.0, 20.0)));

    // Text starts at border + padding inside the box; "1. huisdier" is row 1
    let hit = page.hit_test(Point::new(41.0, 45.0)).unwrap();
    assert_eq!(page.text_content(hit.node).as_deref(), Some("1. huisdier"));
    assert_eq!(hit.offset, 3);
}

#[test]
fn test_popup_hides_page_below() {
    let mut page = page("de kat loopt\n\n\nen de kat zit");
    assert!(page.hit_test(Point::new(5.0, 50.0)).is_some());

    page.show_popup(0, &kat_popup(Point::new(0.0, 18.0)));
    assert!(page.hit_test(Point::new(5.0, 50.0)).is_none());

    page.remove_popup(0);
    assert_eq!(page.popup_count(), 0);
    assert!(page.hit_test(Point::new(5.0, 50.0)).is_some());
}

#[test]
fn test_popup_text_is_clipped() {
    let mut popup = kat_popup(Point::new(0.0, 0.0));
    popup.entries[0].definitions = (0..12)
        .map(|i| Definition {
            text: format!("betekenis {}", i),
            examples: None,
        })
        .collect();

    let mut page = page("");
    page.show_popup(0, &popup);

    // (150 - 2 * 4) / 16 rows fit
    let lines = page.popup_lines(0);
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[7], "7. betekenis 6");
}

#[test]
fn test_remove_popup_closes_deeper_ones() {
    let mut page = page("de kat");
    page.show_popup(0, &kat_popup(Point::new(0.0, 18.0)));
    page.show_popup(1, &kat_popup(Point::new(30.0, 60.0)));

    page.remove_popup(0);
    assert_eq!(page.popup_count(), 0);
}

#[test]
fn test_wrap() {
    assert_eq!(wrap("een groot huis", 9), vec!["een groot", "huis"]);
    assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    assert_eq!(wrap("  de kat", 20), vec!["  de kat"]);
    assert_eq!(wrap("", 5), vec![""]);
}
