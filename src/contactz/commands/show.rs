use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ContactPage, ContactView};
use crate::error::Result;
use crate::model::Record;
use chrono::NaiveDate;
use std::num::NonZeroUsize;

/// Lists the book in pages of `page_size`.
///
/// With `page` set only that (1-based) page is returned, otherwise every page is.
pub fn run(
    book: &AddressBook,
    page_size: NonZeroUsize,
    page: Option<usize>,
    today: NaiveDate,
) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No contacts found")));
    }

    let total = book.page_count(page_size);
    let to_page = |(i, records): (usize, Vec<Record>)| ContactPage {
        number: i + 1,
        total,
        contacts: records
            .into_iter()
            .map(|record| ContactView::new(record, today))
            .collect(),
    };

    let pages: Vec<ContactPage> = match page {
        None => book.pages(page_size).enumerate().map(to_page).collect(),
        Some(n) if n >= 1 && n <= total => book
            .pages(page_size)
            .enumerate()
            .nth(n - 1)
            .map(to_page)
            .into_iter()
            .collect(),
        Some(n) => {
            return Ok(CmdResult::default().with_message(CmdMessage::error(format!(
                "Page {} does not exist ({} page{} of {})",
                n,
                total,
                if total == 1 { "" } else { "s" },
                page_size
            ))))
        }
    };

    Ok(CmdResult::default().with_pages(pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::BirthdayNote;
    use crate::store::memory::fixtures::BookFixture;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_book_says_so() {
        let result = run(&AddressBook::new(), size(10), None, day(2024, 1, 1)).unwrap();
        assert!(result.pages.is_empty());
        assert_eq!(result.messages[0].content, "No contacts found");
    }

    #[test]
    fn splits_into_pages() {
        let book = BookFixture::new().with_contacts(7).build();

        let result = run(&book, size(3), None, day(2024, 1, 1)).unwrap();

        let sizes: Vec<_> = result.pages.iter().map(|p| p.contacts.len()).collect();
        assert_eq!(sizes, [3, 3, 1]);
        assert!(result.pages.iter().all(|p| p.total == 3));
        assert_eq!(result.pages[2].number, 3);
        assert_eq!(
            result.pages[2].contacts[0].record.name().as_str(),
            "Contact 07"
        );
    }

    #[test]
    fn selects_a_single_page() {
        let book = BookFixture::new().with_contacts(7).build();

        let result = run(&book, size(3), Some(2), day(2024, 1, 1)).unwrap();

        assert_eq!(result.pages.len(), 1);
        assert_eq!(result.pages[0].number, 2);
        assert_eq!(
            result.pages[0].contacts[0].record.name().as_str(),
            "Contact 04"
        );
    }

    #[test]
    fn out_of_range_page_is_an_error_message() {
        let book = BookFixture::new().with_contacts(2).build();

        for page in [0, 2] {
            let result = run(&book, size(5), Some(page), day(2024, 1, 1)).unwrap();
            assert!(result.has_errors());
            assert!(result.pages.is_empty());
        }
    }

    #[test]
    fn annotates_birthdays() {
        let book = BookFixture::new()
            .with_birthday_contact("Alice", &["1234567890"], "2024-06-15")
            .with_contact("Bob", &[])
            .build();

        let result = run(&book, size(10), None, day(2024, 6, 10)).unwrap();
        let contacts = &result.pages[0].contacts;
        assert_eq!(contacts[0].record.name().as_str(), "Alice");
        assert_eq!(contacts[0].birthday_note, Some(BirthdayNote::InDays(5)));
        assert_eq!(contacts[1].record.name().as_str(), "Bob");
        assert_eq!(contacts[1].birthday_note, None);

        let on_the_day = run(&book, size(10), None, day(2025, 6, 15)).unwrap();
        assert_eq!(
            on_the_day.pages[0].contacts[0].birthday_note,
            Some(BirthdayNote::Today)
        );
    }
}
