use colored::Colorize;
use contactz::api::{BirthdayNote, CmdMessage, ContactPage, ContactView, MessageLevel};
use contactz::commands::helpers::join_phones;
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_pages(pages: &[ContactPage]) {
    let multi = pages.first().is_some_and(|p| p.total > 1);
    for (i, page) in pages.iter().enumerate() {
        if multi {
            if i > 0 {
                println!();
            }
            println!(
                "{}",
                format!("Page {} of {}", page.number, page.total).bold()
            );
        }
        print_contacts(&page.contacts);
    }
}

pub(super) fn print_contacts(contacts: &[ContactView]) {
    let width = name_column_width(contacts);
    for view in contacts {
        println!("{}", format_contact(view, width));
    }
}

fn name_column_width(contacts: &[ContactView]) -> usize {
    contacts
        .iter()
        .map(|v| v.record.name().as_str().width())
        .max()
        .unwrap_or(0)
}

/// `NAME: phones (annotation)`, with the name padded to `width` display columns.
fn format_contact(view: &ContactView, width: usize) -> String {
    let name = view.record.name().as_str();
    let padding = " ".repeat(width.saturating_sub(name.width()));
    let mut line = format!("{}:{} {}", name.bold(), padding, join_phones(&view.record));
    if let Some(note) = view.birthday_note {
        line.push_str(&format!(" ({})", describe_birthday(note)));
    }
    line
}

fn describe_birthday(note: BirthdayNote) -> String {
    match note {
        BirthdayNote::Today => "Today is their birthday!".to_string(),
        BirthdayNote::InDays(days) => format!("{} days until their birthday", days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contactz::model::{Birthday, Name, Record};

    fn view(name: &str, phones: &[&str], birthday: Option<&str>) -> ContactView {
        let mut record = Record::new(Name::new(name).unwrap());
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        if let Some(date) = birthday {
            record.set_birthday(Birthday::parse(date).unwrap());
        }
        ContactView::new(record, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
    }

    fn line(view: &ContactView, width: usize) -> String {
        colored::control::set_override(false);
        format_contact(view, width)
    }

    #[test]
    fn contact_line_with_countdown() {
        let v = view("Alice", &["1234567890", "5551234567"], Some("1990-06-15"));
        assert_eq!(
            line(&v, 5),
            "Alice: 1234567890, 5551234567 (5 days until their birthday)"
        );
    }

    #[test]
    fn contact_line_on_the_day() {
        let v = view("Alice", &["1234567890"], Some("1990-06-10"));
        assert!(line(&v, 5).ends_with("(Today is their birthday!)"));
    }

    #[test]
    fn contact_line_without_birthday_or_phones() {
        let v = view("Bob", &[], None);
        assert_eq!(line(&v, 3), "Bob: ");
    }

    #[test]
    fn names_are_padded_by_display_width() {
        let contacts = vec![view("Zoë", &[], None), view("Bob", &[], None)];
        assert_eq!(name_column_width(&contacts), 3);

        let contacts = vec![view("Al", &[], None), view("Alexandra", &[], None)];
        let width = name_column_width(&contacts);
        assert_eq!(line(&contacts[0], width), format!("Al:{}", " ".repeat(8)));
    }

    #[test]
    fn countdown_wording() {
        assert_eq!(
            describe_birthday(BirthdayNote::InDays(364)),
            "364 days until their birthday"
        );
    }
}
