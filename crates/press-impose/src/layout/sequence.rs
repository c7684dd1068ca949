//! Page sequencing and padding
//!
//! Builds the canonical ordered page list and pads it with blanks to the
//! multiple a layout strategy requires. Padding only appends; it never
//! reorders what is already there.

use super::PageRef;

/// The canonical page run `1..=total_pages`. Zero pages yield an empty
/// run, which every strategy treats as "nothing to do".
pub fn page_run(total_pages: usize) -> Vec<PageRef> {
    (1..=total_pages).map(PageRef::Page).collect()
}

/// Append blanks until the length is a multiple of `multiple`.
///
/// Idempotent: padding an already padded list changes nothing. The result
/// length is the smallest multiple of `multiple` that fits the input.
pub fn pad_to_multiple(mut pages: Vec<PageRef>, multiple: usize) -> Vec<PageRef> {
    if multiple == 0 {
        return pages;
    }
    while pages.len() % multiple != 0 {
        pages.push(PageRef::Blank);
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_run() {
        assert_eq!(
            page_run(3),
            vec![PageRef::Page(1), PageRef::Page(2), PageRef::Page(3)]
        );
        assert!(page_run(0).is_empty());
    }

    #[test]
    fn test_pad_appends_blanks() {
        let padded = pad_to_multiple(page_run(5), 4);
        assert_eq!(padded.len(), 8);
        assert_eq!(padded[4], PageRef::Page(5));
        assert!(padded[5..].iter().all(|p| p.is_blank()));
    }

    #[test]
    fn test_pad_idempotent() {
        let once = pad_to_multiple(page_run(5), 4);
        let twice = pad_to_multiple(once.clone(), 4);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pad_exact_multiple_unchanged() {
        let padded = pad_to_multiple(page_run(8), 4);
        assert_eq!(padded.len(), 8);
    }

    #[test]
    fn test_pad_empty_stays_empty() {
        assert!(pad_to_multiple(Vec::new(), 4).is_empty());
    }
}
