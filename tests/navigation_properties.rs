//! Property tests for paging and selection movement.

use bibliognost::prelude::*;
use proptest::prelude::*;

fn items(n: usize) -> Vec<DisplayItem> {
    (0..n)
        .map(|i| DisplayItem::new(i as i64, format!("item {}", i)))
        .collect()
}

proptest! {
    #[test]
    fn pages_cover_all_items(n in 1usize..200, page_size in 1usize..20) {
        let mut pager = Pager::new(items(n), page_size).unwrap();
        let total = pager.total_pages();
        prop_assert_eq!(total, n.div_ceil(page_size));

        pager.set_page(total - 1);
        let last = pager.items_on_page();
        prop_assert_eq!(last, n - (total - 1) * page_size);
        prop_assert!(last >= 1 && last <= page_size);
    }

    #[test]
    fn exactly_one_row_is_highlighted(
        n in 0usize..40,
        rows in 1u16..8,
        moves in proptest::collection::vec(any::<bool>(), 0..60)
    ) {
        let mut list = ListView::new(items(n), Canvas::new(rows, 16)).unwrap();
        let expected = if n == 0 { 0 } else { 1 };

        for down in moves {
            if down { list.advance(); } else { list.retreat(); }
            prop_assert_eq!(list.surface().highlighted_rows().len(), expected);
            prop_assert!(list.current() < rows as usize);
            prop_assert_eq!(list.pager().page(), list.page());
            if let Some(item) = list.selected() {
                let row = list.surface().highlighted_rows()[0];
                prop_assert_eq!(list.surface().line(row), item.label.clone());
            }
        }
    }

    #[test]
    fn predicates_predict_moves(
        n in 0usize..30,
        rows in 1u16..6,
        moves in proptest::collection::vec(any::<bool>(), 0..40)
    ) {
        let mut list = ListView::new(items(n), Canvas::new(rows, 16)).unwrap();

        for down in moves {
            let before = list.selection();
            let predicted = if down { list.has_next() } else { list.has_previous() };
            let moved = if down { list.advance() } else { list.retreat() };
            prop_assert_eq!(moved, predicted);
            if !moved {
                prop_assert_eq!(list.selection(), before);
            }
        }
    }

    #[test]
    fn moves_round_trip(
        n in 1usize..30,
        rows in 1u16..6,
        steps in 0usize..40
    ) {
        let mut list = ListView::new(items(n), Canvas::new(rows, 16)).unwrap();
        for _ in 0..steps {
            list.advance();
        }

        let before = list.selection();
        let lines = list.surface().lines();
        if list.advance() {
            prop_assert!(list.retreat());
            prop_assert_eq!(list.selection(), before);
            prop_assert_eq!(list.surface().lines(), lines.clone());
        }
        if list.retreat() {
            prop_assert!(list.advance());
            prop_assert_eq!(list.selection(), before);
            prop_assert_eq!(list.surface().lines(), lines);
        }
    }

    #[test]
    fn refresh_does_not_change_the_picture(
        n in 0usize..30,
        rows in 1u16..6,
        steps in 0usize..30
    ) {
        let mut list = ListView::new(items(n), Canvas::new(rows, 16)).unwrap();
        for _ in 0..steps {
            list.advance();
        }

        list.refresh().unwrap();
        let lines = list.surface().lines();
        let highlighted = list.surface().highlighted_rows();
        list.refresh().unwrap();
        prop_assert_eq!(list.surface().lines(), lines);
        prop_assert_eq!(list.surface().highlighted_rows(), highlighted);
    }
}
