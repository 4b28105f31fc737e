/// Two-letter badge shown next to a record: first two characters, uppercased
///
/// ```
/// use contracts::domain::common::initials_of;
/// assert_eq!(initials_of("Essilor International"), "ES");
/// assert_eq!(initials_of("óticas"), "ÓT");
/// ```
pub fn initials_of(text: &str) -> String {
    text.trim().chars().take(2).collect::<String>().to_uppercase()
}
