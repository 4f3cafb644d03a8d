/// Which block of the pasted text the parser is currently reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    /// No header seen yet; lines are ignored
    #[default]
    None,
    Ingredients,
    Instructions,
}

/// What a single line means once the current section is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The line is a header and switches to the given section
    Header(Section),
    /// The line is data belonging to the given section
    Data(Section),
}

/// Recognizes a section header by substring match on the lower-cased line.
///
/// Every line goes through this check, so an ingredient such as
/// "instruction mix" is taken as a header. That loss is silent.
pub fn classify_header(line: &str) -> Option<Section> {
    let lowered = line.trim().to_lowercase();

    if lowered.contains("ingredient") {
        Some(Section::Ingredients)
    } else if lowered.contains("instruction") || lowered.contains("direction") {
        Some(Section::Instructions)
    } else {
        None
    }
}

impl Section {
    /// Transition for one line: headers move to a new section, anything else
    /// stays in the current one.
    pub fn advance(self, line: &str) -> Step {
        match classify_header(line) {
            Some(next) => Step::Header(next),
            None => Step::Data(self),
        }
    }
}
