/// The three user-editable intake fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Organization,
    Role,
    Description,
}

impl FieldId {
    /// All fields in display order.
    pub const ALL: [FieldId; 3] = [Self::Organization, Self::Role, Self::Description];

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Role => "Role",
            Self::Description => "What are you building?",
        }
    }

    /// Whether the field accepts line breaks.
    pub fn is_multiline(self) -> bool {
        self == Self::Description
    }
}

/// A single edit applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    /// Append a character.
    Insert(char),
    /// Remove the last character.
    Backspace,
    /// Append a line break; ignored by single-line fields.
    Newline,
}

/// Current values of the editable fields, untrimmed as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntakeFields {
    pub organization: String,
    pub role: String,
    pub description: String,
}

impl IntakeFields {
    /// Returns the value of `field`.
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Organization => &self.organization,
            FieldId::Role => &self.role,
            FieldId::Description => &self.description,
        }
    }

    fn get_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Organization => &mut self.organization,
            FieldId::Role => &mut self.role,
            FieldId::Description => &mut self.description,
        }
    }

    /// Applies `edit` to `field`.
    pub fn apply(&mut self, field: FieldId, edit: FieldEdit) {
        let value = self.get_mut(field);
        match edit {
            FieldEdit::Insert(ch) => value.push(ch),
            FieldEdit::Backspace => {
                value.pop();
            }
            FieldEdit::Newline if field.is_multiline() => value.push('\n'),
            FieldEdit::Newline => {}
        }
    }

    /// Returns `true` if every field is empty.
    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|&f| self.get(f).is_empty())
    }
}
