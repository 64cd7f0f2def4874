//! # Interactive Shell
//!
//! The numbered text menu the canteen staff use. The shell only collects fields,
//! calls into the [`Canteen`], and renders the results; all bookkeeping lives in
//! the core modules.
//!
//! The shell reads from any [`BufRead`] and writes to any [`Write`], so a session
//! can be scripted:
//!
//! ```rust
//! use canteen::lifecycle::Canteen;
//! use canteen::persistence::DataFile;
//! use canteen::shell::{Exit, Shell};
//!
//! let mut canteen = Canteen::new(DataFile::new("unused.json"));
//! let script = "1\nSoup\n5\nyes\n4\n";
//! let mut shell = Shell::new(script.as_bytes(), Vec::new());
//!
//! let exit = shell.run(&mut canteen).unwrap();
//! assert_eq!(exit, Exit::EndOfInput);
//! assert_eq!(canteen.menu.len(), 1);
//! ```

pub mod command;
pub mod input;
pub mod table;

pub use command::Command;

use crate::lifecycle::Canteen;
use crate::model::{DishId, OrderId};
use crate::orders::OrderListing;
use crate::persistence::PersistenceError;
use input::InputError;
use std::io::{self, BufRead, Write};
use table::{format_price, Table};
use thiserror::Error;
use tracing::{debug, warn};

pub const BANNER: &str = "Welcome to Zesty Zomato Canteen!";
pub const FAREWELL: &str = "Thank you for using Zesty Zomato Canteen. Have a great day!";

/// Errors that end the shell loop.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user chose "Save and Exit" and the data file was written.
    Saved,
    /// Input ran out; nothing was saved.
    EndOfInput,
}

/// Outcome of one action.
enum Step {
    Continue,
    EndOfInput,
}

/// Outcome of reading one field.
enum Field<T> {
    Value(T),
    Invalid,
    EndOfInput,
}

/// Reads a field or leaves the current action early.
macro_rules! field {
    ($shell:expr, $label:expr, $parse:expr) => {
        match $shell.read_field($label, $parse)? {
            Field::Value(value) => value,
            Field::Invalid => return Ok(Step::Continue),
            Field::EndOfInput => return Ok(Step::EndOfInput),
        }
    };
}

pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output sink, e.g. to inspect a scripted session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until the user saves and exits or input runs out.
    pub fn run(&mut self, canteen: &mut Canteen) -> Result<Exit, ShellError> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice (1-9): ")? else {
                debug!("Input closed at main menu");
                return Ok(Exit::EndOfInput);
            };
            let command = match choice.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    debug!(error = %e, "Rejected menu choice");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };
            debug!(?command, "Menu choice");

            let step = match command {
                Command::AddDish => self.add_dish(canteen)?,
                Command::RemoveDish => self.remove_dish(canteen)?,
                Command::UpdateAvailability => self.update_availability(canteen)?,
                Command::DisplayMenu => self.display_menu(canteen)?,
                Command::TakeOrder => self.take_order(canteen)?,
                Command::UpdateOrderStatus => self.update_order_status(canteen)?,
                Command::ReviewOrders => self.print_orders(canteen, None)?,
                Command::FilterOrders => self.filter_orders(canteen)?,
                Command::SaveAndExit => {
                    canteen.save()?;
                    writeln!(self.output, "Data saved successfully.")?;
                    writeln!(self.output, "{FAREWELL}")?;
                    return Ok(Exit::Saved);
                }
            };
            if let Step::EndOfInput = step {
                debug!("Input closed during {command:?}");
                return Ok(Exit::EndOfInput);
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{BANNER}")?;
        for command in Command::ALL {
            writeln!(self.output, "{command}")?;
        }
        Ok(())
    }

    /// Prints `label` and reads one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_field<T>(
        &mut self,
        label: &str,
        parse: impl FnOnce(&str) -> Result<T, InputError>,
    ) -> io::Result<Field<T>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(Field::EndOfInput);
        };
        match parse(&raw) {
            Ok(value) => Ok(Field::Value(value)),
            Err(e) => {
                writeln!(self.output, "{e}")?;
                Ok(Field::Invalid)
            }
        }
    }

    fn add_dish(&mut self, canteen: &mut Canteen) -> Result<Step, ShellError> {
        let name = field!(self, "Enter the dish name: ", input::parse_name);
        let price = field!(self, "Enter the price: ", input::parse_price);
        let availability = field!(
            self,
            "Is the dish available? (yes/no): ",
            input::parse_availability
        );
        match canteen.menu.add_dish(&name, price, availability) {
            Ok(id) => writeln!(
                self.output,
                "Added '{name}' to the menu with dish ID {id}."
            )?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Step::Continue)
    }

    fn remove_dish(&mut self, canteen: &mut Canteen) -> Result<Step, ShellError> {
        let id = field!(self, "Enter the dish ID to remove: ", input::parse_id::<DishId>);
        match canteen.menu.remove_dish(id) {
            Ok(_) => writeln!(self.output, "Removed dish with ID {id} from the menu.")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Step::Continue)
    }

    fn update_availability(&mut self, canteen: &mut Canteen) -> Result<Step, ShellError> {
        let id = field!(
            self,
            "Enter the dish ID to update availability: ",
            input::parse_id::<DishId>
        );
        let availability = field!(
            self,
            "Enter the new availability (yes/no): ",
            input::parse_availability
        );
        match canteen.menu.update_availability(id, availability) {
            Ok(_) => writeln!(
                self.output,
                "Updated availability of dish with ID {id} to '{availability}'."
            )?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Step::Continue)
    }

    fn display_menu(&mut self, canteen: &Canteen) -> Result<Step, ShellError> {
        let available = canteen.menu.list_available();
        if available.is_empty() {
            writeln!(self.output, "No available dishes in the menu.")?;
            return Ok(Step::Continue);
        }
        let mut table = Table::new(&["ID", "Name", "Price", "Availability"]);
        for dish in available {
            table.push_row(vec![
                dish.id.to_string(),
                dish.name.clone(),
                format_price(dish.price),
                dish.availability.to_string(),
            ]);
        }
        write!(self.output, "{table}")?;
        Ok(Step::Continue)
    }

    fn take_order(&mut self, canteen: &mut Canteen) -> Result<Step, ShellError> {
        let customer_name = field!(self, "Enter the customer name: ", |raw: &str| Ok(
            raw.trim().to_string()
        ));
        let dish_ids = field!(
            self,
            "Enter the dish IDs (comma-separated): ",
            input::parse_dish_ids
        );
        match canteen.take_order(&customer_name, dish_ids) {
            Ok(id) => writeln!(self.output, "Order received. Order ID: {id}")?,
            Err(e) => {
                if e.is_rejection() {
                    warn!(error = %e, customer = %customer_name, "Order not taken");
                }
                writeln!(self.output, "{e}")?
            }
        }
        Ok(Step::Continue)
    }

    fn update_order_status(&mut self, canteen: &mut Canteen) -> Result<Step, ShellError> {
        let id = field!(
            self,
            "Enter the order ID to update status: ",
            input::parse_id::<OrderId>
        );
        let status = field!(self, "Enter the new status: ", |raw: &str| Ok(
            raw.trim().to_string()
        ));
        match canteen.orders.update_status(id, &status) {
            Ok(_) => writeln!(
                self.output,
                "Updated status of order with ID {id} to '{status}'."
            )?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Step::Continue)
    }

    fn filter_orders(&mut self, canteen: &Canteen) -> Result<Step, ShellError> {
        let filter = field!(self, "Enter the order status to filter: ", |raw: &str| Ok(
            input::parse_status_filter(raw)
        ));
        self.print_orders(canteen, Some(&filter))
    }

    fn print_orders(
        &mut self,
        canteen: &Canteen,
        status_filter: Option<&str>,
    ) -> Result<Step, ShellError> {
        match canteen.list_orders(status_filter) {
            OrderListing::Empty => writeln!(self.output, "No orders found.")?,
            OrderListing::NoMatch(status) => {
                writeln!(self.output, "No orders found with status '{status}'.")?
            }
            OrderListing::Orders(rows) => {
                let mut table =
                    Table::new(&["Order ID", "Customer", "Dishes", "Total Price", "Status"]);
                for row in rows {
                    table.push_row(vec![
                        row.id.to_string(),
                        row.customer_name,
                        row.dish_names.join(", "),
                        format_price(row.total_price),
                        row.status,
                    ]);
                }
                write!(self.output, "{table}")?;
            }
        }
        Ok(Step::Continue)
    }
}
