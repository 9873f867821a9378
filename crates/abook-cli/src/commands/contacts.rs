use abook_core::Record;
use abook_store::{ContactBook, error::Result};

pub fn add(book: &mut ContactBook, record: Record) -> String {
    let name = record.name.to_string();
    book.add(record);
    format!("Contact {name} has been added.")
}

pub fn change(book: &mut ContactBook, record: Record) -> String {
    let name = record.name.to_string();
    book.update(record);
    format!("Contact {name} has been updated.")
}

pub fn delete(book: &mut ContactBook, name: &str) -> Result<String> {
    book.delete(name)?;
    Ok(format!("Contact {name} successfully deleted"))
}

pub fn search(book: &ContactBook, name: &str) -> String {
    match book.find(name) {
        Some(record) => detail_line(record),
        None => "Contact not found.".to_string(),
    }
}

pub fn show_all(book: &ContactBook) -> String {
    if book.is_empty() {
        return "Список контактів пустий.".to_string();
    }

    let rule = "-".repeat(114);
    let mut out = String::from("Contacts:\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<14}|{:^16}|{:^18}|{:^30}|{:^31}|\n",
        "Name", "Number", "Birthday", "Email", "Address"
    ));
    for record in book.iter() {
        out.push_str(&format!(
            "{:<14}|{:^16}|{:^18}|{:^30}|{:^31}|\n",
            record.name.as_str(),
            record.primary_phone().map_or("", |phone| phone.as_str()),
            record.birthday.to_string(),
            record.email.as_ref().map_or("", |email| email.as_str()),
            record.address.as_ref().map_or("", |address| address.as_str()),
        ));
    }
    out.push_str(&rule);
    out
}

fn detail_line(record: &Record) -> String {
    format!(
        "{}: phone {}, birthday {}, email {}, address {}",
        record.name,
        record.primary_phone().map_or("-", |phone| phone.as_str()),
        record.birthday,
        record.email.as_ref().map_or("-", |email| email.as_str()),
        record.address.as_ref().map_or("-", |address| address.as_str()),
    )
}
