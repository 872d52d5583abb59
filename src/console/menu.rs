/// Printed before every selection.
pub const MENU: &str = "\nConsole App Menu:\n\
1. Download data.\n\
2. Display all records.\n\
3. Delete a record.\n\
4. Edit a record.\n\
5. Add a record.\n\
6. Exit\n\
Select an option: ";

pub const MSG_INVALID_OPTION: &str = "Invalid option. Please try again.";
pub const MSG_INVALID_ID: &str = "Invalid ID format. Please enter a valid integer.";
pub const MSG_ID_REQUIRED: &str = "The ID must be provided.";
pub const MSG_EDIT_FIELDS_REQUIRED: &str = "Name and data cannot be empty.";
pub const MSG_ADD_FIELDS_REQUIRED: &str = "Both author and data must be provided.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Download,
    List,
    Delete,
    Edit,
    Add,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Download),
            "2" => Some(Self::List),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Edit),
            "5" => Some(Self::Add),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}
