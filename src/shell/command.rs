use std::fmt;
use std::str::FromStr;

/// The nine actions offered by the main menu, numbered 1 to 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddDish,
    RemoveDish,
    UpdateAvailability,
    DisplayMenu,
    TakeOrder,
    UpdateOrderStatus,
    ReviewOrders,
    FilterOrders,
    SaveAndExit,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::AddDish,
        Command::RemoveDish,
        Command::UpdateAvailability,
        Command::DisplayMenu,
        Command::TakeOrder,
        Command::UpdateOrderStatus,
        Command::ReviewOrders,
        Command::FilterOrders,
        Command::SaveAndExit,
    ];

    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).map_or(0, |i| i + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::AddDish => "Add a new dish to the menu",
            Command::RemoveDish => "Remove a dish from the menu",
            Command::UpdateAvailability => "Update the availability of a dish",
            Command::DisplayMenu => "Display the menu",
            Command::TakeOrder => "Take a new order",
            Command::UpdateOrderStatus => "Update the status of an order",
            Command::ReviewOrders => "Review all orders",
            Command::FilterOrders => "Filter orders by status",
            Command::SaveAndExit => "Save and Exit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid choice '{0}'")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| UnknownCommand(choice.to_string()))
    }
}
