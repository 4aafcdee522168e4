use crate::error::HeadshotError;
use std::fmt;
use std::path::Path;

/// First and last name taken from the front of a headshot filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    /// Parse `<First>.<Last>` from the start of a filename.
    ///
    /// The extension is dropped first, so `Madonna.jpg` does not yield a last
    /// name of `jpg`. The last name must end the stem or be followed by a dot;
    /// whatever comes after that dot is ignored, so `John.Doe.photo.png` gives
    /// `John` / `Doe` while `Anne.O'Neil.jpg` is rejected.
    pub fn parse(file_name: &str) -> Result<Self, HeadshotError> {
        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);

        let fail = || HeadshotError::NameParse {
            file_name: file_name.to_string(),
        };

        let (first, rest) = split_alphabetic(stem);
        if first.is_empty() {
            return Err(fail());
        }
        let rest = rest.strip_prefix('.').ok_or_else(fail)?;
        let (last, trailing) = split_alphabetic(rest);
        if last.is_empty() || !(trailing.is_empty() || trailing.starts_with('.')) {
            return Err(fail());
        }

        Ok(Self {
            first: first.to_string(),
            last: last.to_string(),
        })
    }

    /// Name of the normalized output file.
    pub fn output_file_name(&self) -> String {
        format!("{}.{}.jpg", self.first, self.last)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// Split off the leading run of alphabetic characters.
fn split_alphabetic(s: &str) -> (&str, &str) {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(file_name: &str) -> (String, String) {
        let name = PersonName::parse(file_name).unwrap();
        (name.first, name.last)
    }

    #[test]
    fn plain_first_last() {
        assert_eq!(parsed("John.Doe.jpg"), ("John".into(), "Doe".into()));
    }

    #[test]
    fn trailing_text_is_ignored() {
        assert_eq!(parsed("John.Doe.photo.png"), ("John".into(), "Doe".into()));
        assert_eq!(parsed("Alice.Smith.headshot.jpg"), ("Alice".into(), "Smith".into()));
        assert_eq!(parsed("John.Doe.v2.jpg"), ("John".into(), "Doe".into()));
        assert_eq!(parsed("Bob.Jones.2024-final.JPEG"), ("Bob".into(), "Jones".into()));
    }

    #[test]
    fn case_is_preserved_not_required() {
        assert_eq!(parsed("jane.DOE.jpg"), ("jane".into(), "DOE".into()));
    }

    #[test]
    fn non_ascii_letters_are_alphabetic() {
        assert_eq!(parsed("José.Núñez.png"), ("José".into(), "Núñez".into()));
    }

    #[test]
    fn rejects_names_not_shaped_first_dot_last() {
        for bad in [
            "Weird_Name.jpg",
            "Madonna.jpg",
            ".Doe.jpg",
            "John..jpg",
            "John.42.jpg",
            "123.Doe.jpg",
            "Anne.O'Neil.jpg",
            "Anne.O'Brien.jpg",
            "John.Doe2.jpg",
            "Bob.Jones_2024-final.jpg",
            "",
        ] {
            let err = PersonName::parse(bad).unwrap_err();
            assert!(
                matches!(err, HeadshotError::NameParse { .. }),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn output_file_name_is_first_dot_last_jpg() {
        let name = PersonName::parse("Bob.Jones.profile.png").unwrap();
        assert_eq!(name.output_file_name(), "Bob.Jones.jpg");
        assert_eq!(name.to_string(), "Bob Jones");
    }
}
