//! Registration form field descriptors

/// An entry in a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const QUALIFICATION_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "",
        label: "Select Qualification",
    },
    SelectOption {
        value: "PG",
        label: "Post Graduate",
    },
    SelectOption {
        value: "UG",
        label: "Under Graduate",
    },
    SelectOption {
        value: "Diploma",
        label: "Diploma",
    },
    SelectOption {
        value: "Secondary Education",
        label: "Secondary Education",
    },
];

pub const EXPERIENCE_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "",
        label: "Are you a Fresher or Experienced?",
    },
    SelectOption {
        value: "Fresher",
        label: "Fresher",
    },
    SelectOption {
        value: "Experienced",
        label: "Experienced",
    },
];

/// How a field accepts input and how it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Masked on screen
    Secret,
    Number,
    Select(&'static [SelectOption]),
}

/// Every user-editable field of the candidate registration form.
///
/// `role` is not listed: it is a constant on the payload and is
/// never validated, so nothing keyed by this enum can refer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegisterField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Mobile,
    Age,
    Place,
    Qualification,
    Experience,
}

impl RegisterField {
    /// Fields in display and validation order
    pub const ALL: [RegisterField; 9] = [
        RegisterField::Name,
        RegisterField::Email,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
        RegisterField::Mobile,
        RegisterField::Age,
        RegisterField::Place,
        RegisterField::Qualification,
        RegisterField::Experience,
    ];

    /// Wire name used in the JSON payload
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Mobile => "mobile",
            Self::Age => "age",
            Self::Place => "place",
            Self::Qualification => "qualification",
            Self::Experience => "experience",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Mobile => "Mobile Number",
            Self::Age => "Age",
            Self::Place => "Location",
            Self::Qualification => "Qualification",
            Self::Experience => "Experience",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter your full name",
            Self::Email => "Enter your email",
            Self::Password => "Enter password",
            Self::ConfirmPassword => "Confirm password",
            Self::Mobile => "Enter 10-digit mobile",
            Self::Age => "Enter your age",
            Self::Place => "Enter your location",
            Self::Qualification => QUALIFICATION_OPTIONS[0].label,
            Self::Experience => EXPERIENCE_OPTIONS[0].label,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Password | Self::ConfirmPassword => FieldKind::Secret,
            Self::Age => FieldKind::Number,
            Self::Qualification => FieldKind::Select(QUALIFICATION_OPTIONS),
            Self::Experience => FieldKind::Select(EXPERIENCE_OPTIONS),
            Self::Name | Self::Email | Self::Mobile | Self::Place => FieldKind::Text,
        }
    }

    pub fn is_select(self) -> bool {
        matches!(self.kind(), FieldKind::Select(_))
    }

    /// Position in [`RegisterField::ALL`]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Get the display label for a select field's stored value
pub fn option_label(options: &[SelectOption], value: &str) -> &'static str {
    options
        .iter()
        .find(|o| o.value == value)
        .or_else(|| options.first())
        .map(|o| o.label)
        .unwrap_or("")
}

/// Step through a select field's options, wrapping at both ends
pub fn cycle_option(options: &[SelectOption], current: &str, forward: bool) -> &'static str {
    if options.is_empty() {
        return "";
    }
    let pos = options
        .iter()
        .position(|o| o.value == current)
        .unwrap_or(0);
    let next = if forward {
        (pos + 1) % options.len()
    } else if pos == 0 {
        options.len() - 1
    } else {
        pos - 1
    };
    options[next].value
}
