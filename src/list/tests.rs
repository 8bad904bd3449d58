//! Tests for the list view.

use super::*;
use crate::canvas::{Canvas, Op};
use crate::error::Error;
use crate::surface::Surface;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

fn letters(n: usize) -> Vec<DisplayItem> {
    ('A'..='Z')
        .take(n)
        .enumerate()
        .map(|(id, c)| DisplayItem::new(id as i64, c.to_string()))
        .collect()
}

fn list(n: usize, rows: u16) -> ListView<DisplayItem, Canvas> {
    ListView::new(letters(n), Canvas::new(rows, 12)).unwrap()
}

fn selected_label(list: &ListView<DisplayItem, Canvas>) -> Option<String> {
    list.selected().map(|item| item.label.clone())
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

#[test]
fn test_new_paints_first_page_with_first_row_highlighted() {
    let list = list(7, 3);
    assert_eq!(list.surface().lines(), vec!["A", "B", "C"]);
    assert_eq!(list.surface().highlighted_rows(), vec![0]);
    assert_eq!(list.current(), 0);
    assert_eq!(list.page(), 0);
    assert_eq!(list.surface().flushes(), 0);
}

#[test]
fn test_zero_sized_surface_is_rejected() {
    let err = ListView::new(letters(3), Canvas::new(0, 10)).err().unwrap();
    assert!(matches!(err, Error::InvalidViewport { rows: 0, cols: 10 }));

    let err = ListView::new(letters(3), Canvas::new(4, 0)).err().unwrap();
    assert!(matches!(err, Error::InvalidViewport { rows: 4, cols: 0 }));
}

#[test]
fn test_empty_list_is_inert() {
    let mut list = list(0, 3);
    assert_eq!(list.pager().total_pages(), 0);
    assert!(!list.has_next());
    assert!(!list.has_previous());
    assert!(!list.advance());
    assert!(!list.retreat());
    assert_eq!(list.current(), 0);
    assert!(list.selected().is_none());
    assert!(list.selection().is_none());
    assert!(list.surface().highlighted_rows().is_empty());
    assert!(list.surface().lines().iter().all(String::is_empty));
    assert_eq!(list.view(), "");
}

#[test]
fn test_advance_across_page_boundary() {
    let mut list = list(7, 3);
    list.advance();
    list.advance();
    assert_eq!(selected_label(&list).as_deref(), Some("C"));
    assert_eq!(list.current(), 2);

    assert!(list.advance());
    assert_eq!(list.page(), 1);
    assert_eq!(list.current(), 0);
    assert_eq!(selected_label(&list).as_deref(), Some("D"));
    assert_eq!(list.surface().lines(), vec!["D", "E", "F"]);
    assert_eq!(list.surface().highlighted_rows(), vec![0]);
}

#[test]
fn test_five_items_two_per_page() {
    let mut list = list(5, 2);
    assert_eq!(list.pager().total_pages(), 3);

    let mut seen = vec![selected_label(&list).unwrap()];
    for _ in 0..4 {
        assert!(list.advance());
        seen.push(selected_label(&list).unwrap());
    }
    assert_eq!(seen, vec!["A", "B", "C", "D", "E"]);
    assert_eq!(list.surface().lines(), vec!["E", ""]);

    assert!(!list.has_next());
    assert!(!list.advance());
    assert_eq!(selected_label(&list).as_deref(), Some("E"));
    assert_eq!(list.page(), 2);
}

#[test]
fn test_retreat_across_page_boundary_selects_last_row() {
    let mut list = list(7, 3);
    for _ in 0..3 {
        list.advance();
    }
    assert_eq!(list.page(), 1);

    assert!(list.retreat());
    assert_eq!(list.page(), 0);
    assert_eq!(list.current(), 2);
    assert_eq!(list.surface().lines(), vec!["A", "B", "C"]);
    assert_eq!(list.surface().highlighted_rows(), vec![2]);
}

#[test]
fn test_previous_at_first_item_is_noop() {
    let mut list = list(4, 3);
    assert!(!list.has_previous());
    list.surface_mut().take_ops();
    assert!(!list.retreat());
    assert_eq!(list.current(), 0);
    assert!(list.surface_mut().take_ops().is_empty());
}

#[test]
fn test_in_page_move_touches_only_two_rows() {
    let mut list = list(7, 3);
    list.surface_mut().take_ops();

    list.advance();
    assert_eq!(
        list.surface_mut().take_ops(),
        vec![
            Op::Put {
                row: 0,
                highlighted: false
            },
            Op::Put {
                row: 1,
                highlighted: true
            },
        ]
    );
    assert_eq!(list.surface().highlighted_rows(), vec![1]);
}

#[test]
fn test_page_turn_repaints_everything() {
    let mut list = list(7, 3);
    list.advance();
    list.advance();
    list.surface_mut().take_ops();

    list.advance();
    let ops = list.surface_mut().take_ops();
    assert_eq!(ops.first(), Some(&Op::Clear));
    assert_eq!(ops.len(), 4);
}

#[test]
fn test_refresh_is_idempotent() {
    let mut list = list(7, 3);
    list.advance();
    list.surface_mut().take_ops();

    list.refresh().unwrap();
    let lines = list.surface().lines();
    let highlighted = list.surface().highlighted_rows();
    list.refresh().unwrap();

    assert_eq!(list.surface().lines(), lines);
    assert_eq!(list.surface().highlighted_rows(), highlighted);
    assert_eq!(list.surface().flushes(), 2);
    assert!(list.surface_mut().take_ops().is_empty());
}

#[test]
fn test_next_then_previous_round_trips() {
    let mut list = list(8, 3);
    let mut states = Vec::new();
    loop {
        let before = list.selection();
        if !list.advance() {
            break;
        }
        let after = list.selection();
        assert!(list.retreat());
        assert_eq!(list.selection(), before);
        assert!(list.advance());
        assert_eq!(list.selection(), after);
        states.push(after);
    }
    assert_eq!(states.len(), 7);
}

#[test]
fn test_redraw_keeps_selection() {
    let mut list = list(7, 3);
    list.advance();
    list.surface_mut().clear();
    list.redraw();
    assert_eq!(list.surface().lines(), vec!["A", "B", "C"]);
    assert_eq!(list.surface().highlighted_rows(), vec![1]);
}

#[test]
fn test_update_maps_keys() {
    let mut list = list(4, 3);
    assert!(list.update(&key(KeyCode::Char('j'))));
    assert!(list.update(&key(KeyCode::Down)));
    assert_eq!(list.current(), 2);
    assert!(list.update(&key(KeyCode::Char('k'))));
    assert!(list.update(&key(KeyCode::Up)));
    assert_eq!(list.current(), 0);
    assert!(!list.update(&key(KeyCode::Char('x'))));
    assert!(!list.update(&(Box::new(42u8) as Msg)));
}

#[test]
fn test_labels_are_truncated_to_width() {
    let items = vec![DisplayItem::new(1, "The Name of the Rose")];
    let list = ListView::new(items, Canvas::new(2, 8)).unwrap();
    assert_eq!(list.surface().line(0), "The Name");
    assert!(list.view().contains("The Name"));
    assert!(!list.view().contains("Rose"));
}

#[test]
fn test_view_lists_current_page() {
    let mut list = list(5, 2);
    list.advance();
    list.advance();
    let view = list.view();
    assert_eq!(view.lines().count(), 2);
    assert!(view.contains('C'));
    assert!(view.contains('D'));
    assert!(!view.contains('A'));
}

#[test]
fn test_list_shorter_than_page() {
    let mut list = list(2, 5);
    assert_eq!(list.surface().lines(), vec!["A", "B", "", "", ""]);
    assert!(list.advance());
    assert!(!list.has_next());
    assert!(!list.advance());
    assert_eq!(list.surface().highlighted_rows(), vec![1]);
}

#[test]
fn test_control_characters_are_dropped_from_labels() {
    let items = vec![DisplayItem::new(1, "Ab\nc\td\x1b[2Jzz")];
    let list = ListView::new(items, Canvas::new(2, 12)).unwrap();
    assert_eq!(list.surface().line(0), "Abcd[2Jzz");
    assert!(!list.view().contains('\n'));
}
