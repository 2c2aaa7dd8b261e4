/// Move selection cursor one item down, wrapping to the first item.
pub fn select_next(selected: u8, item_count: u8) -> u8 {
    if selected.saturating_add(1) < item_count {
        selected + 1
    } else {
        0
    }
}

/// Move selection cursor one item up, wrapping to the last item.
pub fn select_prev(selected: u8, item_count: u8) -> u8 {
    if selected == 0 {
        item_count.saturating_sub(1)
    } else {
        selected - 1
    }
}

/// Page holding `index` when pages are `page_size` rows tall.
pub fn page_of(index: u8, page_size: u8) -> u8 {
    index / page_size
}

/// Row of `index` within its page.
pub fn row_on_page(index: u8, page_size: u8) -> u8 {
    index % page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_at_both_ends() {
        assert_eq!(select_next(0, 3), 1);
        assert_eq!(select_next(2, 3), 0);
        assert_eq!(select_prev(0, 3), 2);
        assert_eq!(select_prev(2, 3), 1);
    }

    #[test]
    fn single_item_menu_stays_put() {
        assert_eq!(select_next(0, 1), 0);
        assert_eq!(select_prev(0, 1), 0);
    }

    #[test]
    fn next_at_u8_max_does_not_overflow() {
        assert_eq!(select_next(254, 255), 0);
        assert_eq!(select_next(255, 255), 0);
    }

    #[test]
    fn pages_are_seven_rows() {
        assert_eq!(page_of(6, 7), 0);
        assert_eq!(page_of(7, 7), 1);
        assert_eq!(row_on_page(7, 7), 0);
        assert_eq!(row_on_page(13, 7), 6);
    }
}
