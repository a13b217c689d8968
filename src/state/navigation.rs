//! Navigation-related state types.

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum View {
    List,
    Add,
}

impl View {
    /// Title shown above the view.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            View::List => "Plants",
            View::Add => "Add Plant",
        }
    }
}

/// Specifying the fields of the add plant form, in tab order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Name,
    Species,
    Frequency,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Species,
            FormField::Species => FormField::Frequency,
            FormField::Frequency => FormField::Name,
        }
    }

    pub fn previous(self) -> FormField {
        match self {
            FormField::Name => FormField::Frequency,
            FormField::Species => FormField::Name,
            FormField::Frequency => FormField::Species,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Species => "Species",
            FormField::Frequency => "Water every (days)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view() {
        assert_eq!(View::List, View::List);
        assert_ne!(View::List, View::Add);
        assert_eq!(View::List.title(), "Plants");
        assert_eq!(View::Add.title(), "Add Plant");
    }

    #[test]
    fn test_form_field_cycle() {
        let mut field = FormField::Name;
        for expected in [FormField::Species, FormField::Frequency, FormField::Name] {
            field = field.next();
            assert_eq!(field, expected);
        }
        for expected in [FormField::Frequency, FormField::Species, FormField::Name] {
            field = field.previous();
            assert_eq!(field, expected);
        }
    }
}
