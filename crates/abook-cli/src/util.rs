/// Canonical form for user-entered names: first letter of every
/// whitespace-separated word uppercased, the rest lowercased. The store
/// itself is case-sensitive; this runs at the shell boundary so `ada`,
/// `ADA` and `Ada` all address the same record.
pub fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
